use serde::{Deserialize, Serialize};

/// The design system's default swatch palette. The trailing empty entry is the
/// transparent swatch.
pub const DEFAULT_SWATCH_COLORS: [&str; 29] = [
    "#e3abec", "#c2dbf7", "#9fd6ff", "#9de7da", "#9df0c0", "#fff099", "#fed49a", "#d073e0",
    "#86baf3", "#5ebbff", "#44d8be", "#3be282", "#ffe654", "#ffb758", "#bd35bd", "#5779c1",
    "#5679c0", "#00aea9", "#3cba4c", "#f5bc25", "#f99221", "#580d8c", "#001970", "#0a2399",
    "#0b7477", "#0b6b50", "#b67e11", "#b85d0d", "",
];

/// Arrow keys, as far as color navigation is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    Left,
    Right,
    Up,
    Down,
}

/// Reading direction of the host UI; flips horizontal swatch navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Returns the swatch a key press moves to from `current`.
///
/// Right/Down step forward and Left/Up step backward (horizontal keys swap in
/// RTL). Both directions wrap; a `current` that is not in the palette jumps to
/// the first swatch. `None` only for an empty palette.
pub fn swatch_for_key<'a>(
    colors: &'a [String],
    current: &str,
    key: NavigationKey,
    direction: TextDirection,
) -> Option<&'a str> {
    if colors.is_empty() {
        return None;
    }
    let forward = match (key, direction) {
        (NavigationKey::Down, _) => true,
        (NavigationKey::Up, _) => false,
        (NavigationKey::Right, TextDirection::Ltr) | (NavigationKey::Left, TextDirection::Rtl) => true,
        (NavigationKey::Left, TextDirection::Ltr) | (NavigationKey::Right, TextDirection::Rtl) => false,
    };

    let last = colors.len() - 1;
    let target = match colors.iter().position(|c| c == current) {
        None => 0,
        Some(i) if forward => {
            if i == last {
                0
            } else {
                i + 1
            }
        }
        Some(0) => last,
        Some(i) => i - 1,
    };
    colors.get(target).map(String::as_str)
}
