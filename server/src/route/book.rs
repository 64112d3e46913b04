use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, GetBookService, UpdateBookService,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BookTransformer, CreateBookRequest, DeleteBookRequest, GetBookRequest, UpdateRatingRequest,
    UpdateStatusRequest,
};
use crate::response::BookPresenter;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl<R> BookRouter for Router<AppModule<R>>
where
    R: BookQuery + BookModifier,
{
    fn route_book(self) -> Self {
        self.route(
            "/book",
            get(|State(module): State<AppModule<R>>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async move { module.get_all_books().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule<R>>,
                 payload: Result<Json<CreateBookRequest>, JsonRejection>| async move {
                    let Json(req) = payload
                        .map_err(|rejection| ErrorStatus::BadRequest(rejection.body_text()))?;
                    let created = Controller::new(BookTransformer, BookPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)?;
                    Ok::<_, ErrorStatus>((StatusCode::CREATED, created))
                },
            ),
        )
        .route(
            "/book/:id",
            get(
                |State(module): State<AppModule<R>>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(GetBookRequest::new(id))?
                        .handle(|dto| async move { module.get_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule<R>>, Path(id): Path<String>| async move {
                    let transformed = match Controller::new(BookTransformer, BookPresenter)
                        .try_intake(DeleteBookRequest::new(id))
                    {
                        Ok(transformed) => transformed,
                        // the caller wants it gone and it was never there
                        Err(_) => return StatusCode::NO_CONTENT.into_response(),
                    };
                    match transformed
                        .handle(|dto| async move { module.delete_book(dto).await })
                        .await
                    {
                        Ok(code) => code.into_response(),
                        // the caller wants it gone; absence changes nothing for them
                        Err(report) => {
                            tracing::debug!("{report:?}");
                            StatusCode::NO_CONTENT.into_response()
                        }
                    }
                },
            ),
        )
        .route(
            "/book/:id/status/:status",
            put(
                |State(module): State<AppModule<R>>,
                 Path((id, status)): Path<(String, String)>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(UpdateStatusRequest::new(id, status))?
                        .handle(|dto| async move { module.update_status(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/book/:id/rating/:rating",
            put(
                |State(module): State<AppModule<R>>,
                 Path((id, rating)): Path<(String, String)>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(UpdateRatingRequest::new(id, rating))?
                        .handle(|dto| async move { module.update_rating(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
