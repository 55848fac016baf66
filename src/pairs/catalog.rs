//! Fixed delimiter catalog - every bracket and quote shape the engine knows about
//!
//! The catalog is `const`-constructed and never mutated, so it is safe to share
//! across threads without synchronization.

/// Which class of delimiter a descriptor belongs to.
///
/// `Bracket` pairs use distinct open/close characters; `Quote` pairs use the
/// same character for both ends, so open and close are indistinguishable by
/// character alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Bracket,
    Quote,
}

/// Whether a descriptor represents the opening or closing end of its pair.
///
/// For quotes the direction only exists so the catalog can be queried
/// uniformly; the character is the same on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Open,
    Close,
}

/// A single delimiter character and the character that balances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterDescriptor {
    /// Unique identifier, e.g. "open_round" or "close_double_quote"
    pub name: &'static str,
    /// The character this descriptor matches
    pub character: char,
    /// The character that balances it on the other end
    pub paired: char,
    pub family: Family,
    pub direction: Direction,
}

const fn descriptor(
    name: &'static str,
    character: char,
    paired: char,
    family: Family,
    direction: Direction,
) -> DelimiterDescriptor {
    DelimiterDescriptor {
        name,
        character,
        paired,
        family,
        direction,
    }
}

/// Opening bracket descriptors, one per shape.
///
/// Invariant: `OPEN_BRACKETS[i]` pairs with `CLOSE_BRACKETS[i]`; the per-kind
/// nesting counters in the scanners are indexed by position in these tables.
pub const OPEN_BRACKETS: [DelimiterDescriptor; 4] = [
    descriptor("open_round", '(', ')', Family::Bracket, Direction::Open),
    descriptor("open_square", '[', ']', Family::Bracket, Direction::Open),
    descriptor("open_curly", '{', '}', Family::Bracket, Direction::Open),
    descriptor("open_angle", '<', '>', Family::Bracket, Direction::Open),
];

/// Closing bracket descriptors, positionally aligned with [`OPEN_BRACKETS`].
pub const CLOSE_BRACKETS: [DelimiterDescriptor; 4] = [
    descriptor("close_round", ')', '(', Family::Bracket, Direction::Close),
    descriptor("close_square", ']', '[', Family::Bracket, Direction::Close),
    descriptor("close_curly", '}', '{', Family::Bracket, Direction::Close),
    descriptor("close_angle", '>', '<', Family::Bracket, Direction::Close),
];

/// Opening quote descriptors. Same character on both ends of the pair.
pub const OPEN_QUOTES: [DelimiterDescriptor; 3] = [
    descriptor("open_double_quote", '"', '"', Family::Quote, Direction::Open),
    descriptor("open_single_quote", '\'', '\'', Family::Quote, Direction::Open),
    descriptor("open_backtick", '`', '`', Family::Quote, Direction::Open),
];

/// Closing quote descriptors, positionally aligned with [`OPEN_QUOTES`].
pub const CLOSE_QUOTES: [DelimiterDescriptor; 3] = [
    descriptor(
        "close_double_quote",
        '"',
        '"',
        Family::Quote,
        Direction::Close,
    ),
    descriptor(
        "close_single_quote",
        '\'',
        '\'',
        Family::Quote,
        Direction::Close,
    ),
    descriptor("close_backtick", '`', '`', Family::Quote, Direction::Close),
];

/// Upper bound on the number of kinds in any one family.
///
/// Sizes the per-kind counter arrays in the scanners.
pub const MAX_KINDS: usize = 4;

/// All descriptors of the given family and direction, in catalog order.
pub fn descriptors_of(family: Family, direction: Direction) -> &'static [DelimiterDescriptor] {
    match (family, direction) {
        (Family::Bracket, Direction::Open) => &OPEN_BRACKETS,
        (Family::Bracket, Direction::Close) => &CLOSE_BRACKETS,
        (Family::Quote, Direction::Open) => &OPEN_QUOTES,
        (Family::Quote, Direction::Close) => &CLOSE_QUOTES,
    }
}

/// The descriptor that balances `descriptor`: same shape, opposite direction.
pub fn pair_of(descriptor: &DelimiterDescriptor) -> &'static DelimiterDescriptor {
    let own = descriptors_of(descriptor.family, descriptor.direction);
    let opposite = match descriptor.direction {
        Direction::Open => descriptors_of(descriptor.family, Direction::Close),
        Direction::Close => descriptors_of(descriptor.family, Direction::Open),
    };
    let idx = own
        .iter()
        .position(|d| d.name == descriptor.name)
        .expect("descriptor must come from the catalog");
    &opposite[idx]
}

/// Position of `character` within the family's closing-kind table, if any.
///
/// This index is the counter slot used by the scanners.
pub fn closing_kind_index(character: char, family: Family) -> Option<usize> {
    descriptors_of(family, Direction::Close)
        .iter()
        .position(|d| d.character == character)
}
