// internal utilities for dealing with Complex annoyances

use num::{Complex, One, Zero};

/// formatting for Complex, because the default implementation is not
/// readable enough for polynomial display
pub(crate) fn complex_fmt<T: std::fmt::Display + Zero + One + PartialEq>(c: &Complex<T>) -> String {
    let r = &c.re;
    let i = &c.im;
    if i.is_zero() {
        format!("{r}")
    } else if i.is_one() {
        format!("({r}+i)")
    } else {
        format!("({r}+i{i})")
    }
}
