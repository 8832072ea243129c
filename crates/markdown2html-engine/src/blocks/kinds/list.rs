use crate::blocks::types::BlockState;

/// The two flat list flavours of the dialect.
///
/// `-` lines build an unordered list, `*` lines an ordered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn marker(self) -> char {
        match self {
            ListKind::Unordered => '-',
            ListKind::Ordered => '*',
        }
    }

    /// Block state while a list of this kind is open.
    pub fn state(self) -> BlockState {
        match self {
            ListKind::Unordered => BlockState::UnorderedList,
            ListKind::Ordered => BlockState::OrderedList,
        }
    }

    pub fn render_item(self, text: &str) -> String {
        let item = text.trim_start_matches(self.marker()).trim();
        format!("<li>{item}</li>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_item_trims_dashes() {
        assert_eq!(
            ListKind::Unordered.render_item("-  Hello "),
            "<li>Hello</li>"
        );
        assert_eq!(ListKind::Unordered.render_item("--x"), "<li>x</li>");
    }

    #[test]
    fn ordered_item_trims_stars() {
        assert_eq!(ListKind::Ordered.render_item("* World"), "<li>World</li>");
    }

    #[test]
    fn bare_marker_gives_empty_item() {
        assert_eq!(ListKind::Ordered.render_item("*"), "<li></li>");
    }

    #[test]
    fn state_tags() {
        assert_eq!(ListKind::Unordered.state().open_tag(), Some("<ul>"));
        assert_eq!(ListKind::Ordered.state().close_tag(), Some("</ol>"));
    }
}
