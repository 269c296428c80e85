/// HSL colour value with darken/spin and hex conversion.
pub mod hsl;
/// Ordered channel bounds that colours are sampled from.
pub mod range;
