/// Splits the interior of one `(...)` value group into its literal fields.
///
/// A single left-to-right scan tracking whether the cursor sits inside a
/// quoted literal and which quote character opened it. Commas outside quotes
/// close the current field; commas inside quotes are content. A doubled
/// quote character inside a quoted literal is an escaped quote, not a
/// terminator, and both characters are kept so the field still reads as SQL.
///
/// Fields are trimmed of surrounding whitespace. An empty field between two
/// commas is a real position and is preserved; an empty trailing field is
/// dropped.
pub fn split_values(group: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = group.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                current.push(c);
            }
            Some(q) if c == q => {
                if chars.peek() == Some(&q) {
                    // escaped quote: keep both characters, stay quoted
                    chars.next();
                    current.push(q);
                    current.push(q);
                } else {
                    quote = None;
                    current.push(c);
                }
            }
            None if c == ',' => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if !current.trim().is_empty() {
        fields.push(current.trim().to_string());
    }

    fields
}
