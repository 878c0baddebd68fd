//! Swedish county (län) numbers as used in API payloads.

/// Returned by [`name`] for numbers that aren't a county.
pub const UNDEFINED: &str = "Undefined";

/// Returns the name of the county with the given number, or [`UNDEFINED`].
///
/// # Example
///
/// ```
/// use trafikverket_lib::county;
///
/// assert_eq!(county::name(14), "Västra Götalands län");
/// assert_eq!(county::name(11), "Undefined");
/// ```
pub fn name(number: u32) -> &'static str {
    match number {
        1 => "Stockholms län",
        2 => "DEPRECATED, Användes tidigare för Stockholms län",
        3 => "Uppsala län",
        4 => "Södermanlands län",
        5 => "Östergötlands län",
        6 => "Jönköpings län",
        7 => "Kronobergs län",
        8 => "Kalmar län",
        9 => "Gotlands län",
        10 => "Blekinge län",
        12 => "Skåne län",
        13 => "Hallands län",
        14 => "Västra Götalands län",
        17 => "Värmlands län",
        18 => "Örebro län",
        19 => "Västmanlands län",
        20 => "Dalarnas län",
        21 => "Gävleborgs län",
        22 => "Västernorrlands län",
        23 => "Jämtlands län",
        24 => "Västerbottens län",
        25 => "Norrbottens län",
        _ => UNDEFINED,
    }
}
