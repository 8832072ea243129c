/// The block open at a given point of a conversion run.
///
/// One tagged value instead of a flag per block kind, so at most one block
/// is ever open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    None,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl BlockState {
    pub fn is_list(self) -> bool {
        matches!(self, BlockState::UnorderedList | BlockState::OrderedList)
    }

    pub fn open_tag(self) -> Option<&'static str> {
        match self {
            BlockState::None => None,
            BlockState::UnorderedList => Some("<ul>"),
            BlockState::OrderedList => Some("<ol>"),
            BlockState::Paragraph => Some("<p>"),
        }
    }

    pub fn close_tag(self) -> Option<&'static str> {
        match self {
            BlockState::None => None,
            BlockState::UnorderedList => Some("</ul>"),
            BlockState::OrderedList => Some("</ol>"),
            BlockState::Paragraph => Some("</p>"),
        }
    }
}
