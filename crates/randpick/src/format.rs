use crate::types::{Definition, Pick, Results};

/// Width of the report banner and the column the title is centered in.
pub const REPORT_WIDTH: usize = 70;

pub const BULLET: char = '•';

/// Render one cycle's picks as a text report.
///
/// ```text
/// ======================================================================
///                        Tavern Generator
/// ======================================================================
///
/// Roll up a tavern
///
///
/// Name:
///   The Prancing Pony
///
/// Who's Here:
///   • dwarf
///   • hobbit
///
/// ======================================================================
/// ```
///
/// Categories are listed in `display_order` when the definition has one,
/// otherwise in the order they were sampled. Names with no entry in
/// `results` are skipped. The returned string has no trailing newline.
pub fn format_report(definition: &Definition, results: &Results) -> String {
    let banner = banner();
    let mut lines: Vec<String> = vec![
        banner.clone(),
        center(&definition.title, REPORT_WIDTH),
        banner.clone(),
    ];

    if let Some(description) = definition.description.as_deref()
        && !description.is_empty()
    {
        lines.push(format!("\n{}\n", description));
    }

    let order: Vec<&str> = match &definition.display_order {
        Some(order) => order.iter().map(String::as_str).collect(),
        None => results.names().collect(),
    };

    for name in order {
        let Some(pick) = results.get(name) else {
            continue;
        };

        lines.push(format!("\n{}:", definition.label_for(name)));
        match pick {
            Pick::One(item) => lines.push(format!("  {}", item)),
            Pick::Many(items) => {
                for item in items {
                    lines.push(format!("  {} {}", BULLET, item));
                }
            }
        }
    }

    lines.push(format!("\n{}", banner));
    lines.join("\n")
}

fn banner() -> String {
    "=".repeat(REPORT_WIDTH)
}

/// Pad `text` with spaces to `width` characters, text in the middle.
///
/// An odd amount of padding puts the extra space on the right. Text already
/// at least `width` characters long is returned unchanged.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let padding = width - len;
    let left = padding / 2 + (padding & width & 1);
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
