use crate::die::Die;
use crate::DEFAULT_SIDES;

#[must_use]
pub fn d4() -> Die {
    Die::stock(1..=4)
}

#[must_use]
pub fn d6() -> Die {
    Die::stock(1..=DEFAULT_SIDES)
}

#[must_use]
pub fn d8() -> Die {
    Die::stock(1..=8)
}

#[must_use]
pub fn d10() -> Die {
    Die::stock(1..=10)
}

#[must_use]
pub fn d12() -> Die {
    Die::stock(1..=12)
}

#[must_use]
pub fn d20() -> Die {
    Die::stock(1..=20)
}

/// A fair coin with faces `"H"` and `"T"`.
#[must_use]
pub fn coin() -> Die<&'static str> {
    Die::stock(["H", "T"])
}
