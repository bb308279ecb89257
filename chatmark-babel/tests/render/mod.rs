//! Wire → inline element rendering tests

mod messages;
mod properties;
