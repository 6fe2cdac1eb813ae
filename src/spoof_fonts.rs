use crate::channels::FONT_BLOCK_PERCENT;
use crate::noise::decide;
use case_insensitive_string::CaseInsensitiveString;
use std::collections::HashSet;

/// System fonts every session reports as installed. Availability noise
/// applies only to families outside this list.
pub static SYSTEM_FONTS: [&str; 22] = [
    "Arial",
    "Arial Black",
    "Arial Narrow",
    "Calibri",
    "Cambria",
    "Candara",
    "Comic Sans MS",
    "Consolas",
    "Constantia",
    "Corbel",
    "Courier New",
    "Georgia",
    "Impact",
    "Lucida Console",
    "Lucida Sans Unicode",
    "Microsoft Sans Serif",
    "Palatino Linotype",
    "Segoe UI",
    "Tahoma",
    "Times New Roman",
    "Trebuchet MS",
    "Verdana",
];

/// CSS generic families. They resolve through the system list anyway, so
/// blocking them would break layout without hiding anything.
static GENERIC_FAMILIES: [&str; 6] = [
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

lazy_static::lazy_static! {
    /// Case-insensitive membership set over `SYSTEM_FONTS`.
    static ref SYSTEM_FONT_SET: HashSet<CaseInsensitiveString> = SYSTEM_FONTS
        .iter()
        .map(|family| CaseInsensitiveString::from(*family))
        .collect();

    /// Scanner for allow-listed families inside raw CSS font specs.
    static ref SYSTEM_FONT_MATCHER: aho_corasick::AhoCorasick = aho_corasick::AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .build(SYSTEM_FONTS)
        .expect("failed to compile the system font matcher");
}

/// Whether a family is on the always-available system list.
pub fn is_system_font(family: &str) -> bool {
    SYSTEM_FONT_SET.contains(&CaseInsensitiveString::from(family.trim()))
}

/// Whether a raw CSS font spec mentions any system-list family.
pub fn stack_contains_system_font(stack: &str) -> bool {
    SYSTEM_FONT_MATCHER.is_match(stack)
}

/// Stable availability decision for one font family.
///
/// System-list fonts are never blocked, whatever their hash says. Other
/// families are blocked at `FONT_BLOCK_PERCENT` under the session seed,
/// hashing the case-folded name so case variants share one decision.
pub fn font_blocked(seed: u32, family: &str) -> bool {
    let family = family.trim();
    if is_system_font(family) {
        return false;
    }

    decide(seed, family.to_lowercase(), FONT_BLOCK_PERCENT)
}

/// Filter a CSS font-family list down to the families that survive
/// blocking. Quoted names stay whole even when they contain commas,
/// quotes are trimmed, and generic families always pass.
pub fn filter_font_stack(seed: u32, stack: &str) -> Vec<&str> {
    split_families(stack)
        .into_iter()
        .map(|family| family.trim().trim_matches(|c| c == '"' || c == '\'').trim())
        .filter(|family| !family.is_empty())
        .filter(|family| is_generic_family(family) || !font_blocked(seed, family))
        .collect()
}

/// Split a font-family list on commas outside quote pairs. An unterminated
/// quote swallows the rest of the stack into its segment.
fn split_families(stack: &str) -> Vec<&str> {
    let mut families = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;

    for (i, c) in stack.char_indices() {
        match quote {
            Some(open) => {
                if c == open {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => quote = Some(c),
                ',' => {
                    families.push(&stack[start..i]);
                    start = i + 1;
                }
                _ => {}
            },
        }
    }
    families.push(&stack[start..]);

    families
}

fn is_generic_family(family: &str) -> bool {
    GENERIC_FAMILIES
        .iter()
        .any(|generic| family.eq_ignore_ascii_case(generic))
}
