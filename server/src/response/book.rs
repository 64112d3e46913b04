use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::Date;
use uuid::Uuid;

use application::transfer::BookDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: Uuid,
    title: String,
    author: String,
    pubdate: String,
    rating: i32,
    status: String,
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookListResponse {
    items: Vec<BookResponse>,
}

impl IntoResponse for BookListResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

fn format_pub_date(date: Date) -> String {
    // a date-only description cannot fail to format
    date.format(time::macros::format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            author: value.author,
            pubdate: format_pub_date(value.pub_date),
            rating: value.rating,
            status: value.status,
        }
    }
}

pub struct BookPresenter;

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse::from(input)
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = BookListResponse;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        BookListResponse {
            items: input.into_iter().map(BookResponse::from).collect(),
        }
    }
}

impl Exhaust<()> for BookPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}
