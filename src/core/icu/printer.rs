use super::{ArgumentFormat, Element, SelectorCase};

/// Print parsed elements back as canonical message-format text.
pub fn print(elements: &[Element]) -> String {
    let mut out = String::new();
    print_into(&mut out, elements);
    out
}

fn print_into(out: &mut String, elements: &[Element]) {
    for element in elements {
        match element {
            Element::Text(text) => escape_text(out, text),
            Element::EscapedHash => out.push_str("\\#"),
            Element::Argument { id, format } => {
                out.push('{');
                out.push_str(id);
                if let Some(format) = format {
                    out.push_str(", ");
                    print_format(out, format);
                }
                out.push('}');
            }
        }
    }
}

fn print_format(out: &mut String, format: &ArgumentFormat) {
    match format {
        ArgumentFormat::Simple { kind, style } => {
            out.push_str(kind.as_str());
            if let Some(style) = style {
                out.push_str(", ");
                out.push_str(style);
            }
        }
        ArgumentFormat::Plural {
            ordinal,
            offset,
            options,
        } => {
            out.push_str(if *ordinal { "selectordinal" } else { "plural" });
            out.push_str(", ");
            if *offset > 0 {
                out.push_str(&format!("offset:{} ", offset));
            }
            print_options(out, options);
        }
        ArgumentFormat::Select { options } => {
            out.push_str("select, ");
            print_options(out, options);
        }
    }
}

fn print_options(out: &mut String, options: &[SelectorCase]) {
    for (i, case) in options.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&case.selector);
        out.push_str(" {");
        print_into(out, &case.value);
        out.push('}');
    }
}

/// Re-escape characters with syntactic meaning.
fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            _ => out.push(c),
        }
    }
}
