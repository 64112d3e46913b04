use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookPubDate(Date);

impl BookPubDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
