use error_stack::Report;
use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use application::transfer::{
    CreateBookDto, DeleteBookDto, GetBookDto, UpdateRatingDto, UpdateStatusDto,
};
use kernel::KernelError;

use crate::controller::TryIntake;
use crate::error::ErrorStatus;

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    author: String,
    pubdate: String,
    rating: i32,
    status: String,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: String,
}

impl GetBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct UpdateStatusRequest {
    id: String,
    status: String,
}

impl UpdateStatusRequest {
    pub fn new(id: String, status: String) -> Self {
        Self { id, status }
    }
}

#[derive(Debug)]
pub struct UpdateRatingRequest {
    id: String,
    rating: String,
}

impl UpdateRatingRequest {
    pub fn new(id: String, rating: String) -> Self {
        Self { id, rating }
    }
}

fn parse_pub_date(value: &str) -> Result<Date, ErrorStatus> {
    Date::parse(value, time::macros::format_description!("[year]-[month]-[day]"))
        .map_err(|_| ErrorStatus::BadRequest("pubdate must be in yyyy-mm-dd format".to_string()))
}

// an id that does not even parse is indistinguishable from an absent record
fn parse_book_id(value: &str) -> Result<Uuid, ErrorStatus> {
    Uuid::parse_str(value).map_err(|_| {
        ErrorStatus::Kernel(
            Report::new(KernelError::NotFound).attach_printable("book id is not a valid uuid"),
        )
    })
}

pub struct BookTransformer;

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = ErrorStatus;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        let pub_date = parse_pub_date(&input.pubdate)?;
        Ok(CreateBookDto {
            title: input.title,
            author: input.author,
            pub_date: Some(pub_date),
            rating: input.rating,
            status: input.status,
        })
    }
}

impl TryIntake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    type Error = ErrorStatus;
    fn emit(&self, input: GetBookRequest) -> Result<Self::To, Self::Error> {
        Ok(GetBookDto {
            id: parse_book_id(&input.id)?,
        })
    }
}

impl TryIntake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    type Error = ErrorStatus;
    fn emit(&self, input: DeleteBookRequest) -> Result<Self::To, Self::Error> {
        Ok(DeleteBookDto {
            id: parse_book_id(&input.id)?,
        })
    }
}

impl TryIntake<UpdateStatusRequest> for BookTransformer {
    type To = UpdateStatusDto;
    type Error = ErrorStatus;
    fn emit(&self, input: UpdateStatusRequest) -> Result<Self::To, Self::Error> {
        Ok(UpdateStatusDto {
            id: parse_book_id(&input.id)?,
            status: input.status,
        })
    }
}

impl TryIntake<UpdateRatingRequest> for BookTransformer {
    type To = UpdateRatingDto;
    type Error = ErrorStatus;
    fn emit(&self, input: UpdateRatingRequest) -> Result<Self::To, Self::Error> {
        let rating = input.rating.parse::<i32>().map_err(|_| {
            ErrorStatus::BadRequest("Invalid rating, could not convert to int".to_string())
        })?;
        Ok(UpdateRatingDto {
            id: parse_book_id(&input.id)?,
            rating,
        })
    }
}
