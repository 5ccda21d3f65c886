use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

/// Paragraph text from the document body, one paragraph per line.
/// Table cells are flattened in reading order.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, String> {
    let docx = read_docx(bytes).map_err(|e| format!("Unable to read the DOCX document: {e}"))?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
            DocumentChild::Table(table) => collect_table_text(table, &mut lines),
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut buffer = String::new();
    for child in &paragraph.children {
        append_paragraph_child(child, &mut buffer);
    }
    buffer
}

fn append_paragraph_child(child: &ParagraphChild, buffer: &mut String) {
    match child {
        ParagraphChild::Run(run) => append_run_text(run, buffer),
        ParagraphChild::Hyperlink(hyperlink) => {
            for inner in &hyperlink.children {
                append_paragraph_child(inner, buffer);
            }
        }
        _ => {}
    }
}

fn append_run_text(run: &Run, buffer: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(text) => buffer.push_str(&text.text),
            RunChild::Break(_) => buffer.push('\n'),
            RunChild::Tab(_) => buffer.push('\t'),
            _ => {}
        }
    }
}

fn collect_table_text(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
                    TableCellContent::Table(inner) => collect_table_text(inner, lines),
                    _ => {}
                }
            }
        }
    }
}
