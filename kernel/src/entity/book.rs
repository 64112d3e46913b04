mod author;
mod id;
mod pub_date;
mod rating;
mod status;
mod title;

pub use self::{author::*, id::*, pub_date::*, rating::*, status::*, title::*};
use destructure::{Destructure, Mutation};
use std::fmt::Display;
use uuid::Uuid;
use vodca::References;

/// Field-level rejection reasons, reported in declaration order with the
/// first violation winning.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ValidationError {
    TitleRequired,
    AuthorRequired,
    PubDateRequired,
    RatingInvalid,
    StatusInvalid,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::TitleRequired => write!(f, "Title is required"),
            ValidationError::AuthorRequired => write!(f, "Author is required"),
            ValidationError::PubDateRequired => write!(f, "PubDate is required"),
            ValidationError::RatingInvalid => write!(f, "Rating value is not supported"),
            ValidationError::StatusInvalid => write!(f, "Status value is not supported"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    pub_date: BookPubDate,
    rating: Rating,
    status: Status,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        pub_date: BookPubDate,
        rating: Rating,
        status: Status,
    ) -> Self {
        Self {
            id,
            title,
            author,
            pub_date,
            rating,
            status,
        }
    }
}

/// Raw book fields as they arrive from the outside world.
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub pub_date: Option<time::Date>,
    pub rating: i32,
    pub status: String,
}

impl BookDraft {
    /// Checks title, author, pub_date, rating and status in that order and
    /// returns the first violation. A passing draft becomes a [`Book`] with a
    /// freshly stamped id.
    pub fn validate(self) -> Result<Book, ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.author.is_empty() {
            return Err(ValidationError::AuthorRequired);
        }
        let pub_date = self.pub_date.ok_or(ValidationError::PubDateRequired)?;
        let rating = Rating::try_from(self.rating)?;
        let status = self.status.parse::<Status>()?;
        Ok(Book::new(
            BookId::new(Uuid::new_v4()),
            BookTitle::new(self.title),
            BookAuthor::new(self.author),
            BookPubDate::new(pub_date),
            rating,
            status,
        ))
    }
}
