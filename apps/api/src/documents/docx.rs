use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

/// Body paragraphs joined by newlines. Empty paragraphs are kept as empty lines so
/// blank-line section breaks survive extraction.
pub fn extract_docx_text(data: &[u8]) -> Result<String, String> {
    let package = read_docx(data).map_err(|e| e.to_string())?;

    let paragraphs: Vec<String> = package
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut buffer = String::new();
    for child in &paragraph.children {
        match child {
            ParagraphChild::Run(run) => append_run_text(run, &mut buffer),
            ParagraphChild::Hyperlink(link) => {
                for inner in &link.children {
                    if let ParagraphChild::Run(run) = inner {
                        append_run_text(run, &mut buffer);
                    }
                }
            }
            _ => {}
        }
    }
    buffer
}

fn append_run_text(run: &Run, buffer: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(text) => buffer.push_str(&text.text),
            RunChild::Tab(_) => buffer.push('\t'),
            RunChild::Break(_) => buffer.push('\n'),
            _ => {}
        }
    }
}
