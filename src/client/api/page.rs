use crate::{
    client::{
        api::helper::{delete, fetch_empty, fetch_json, get},
        model::error::ApiError,
    },
    model::{
        page::{PageKind, PageVisibility, PaginatedPagesDto},
        profile::{NoteDto, NotesDto},
    },
};

pub async fn get_pages(
    subdomain: &str,
    kind: PageKind,
    visibility: PageVisibility,
    page: u64,
    per_page: u64,
) -> Result<PaginatedPagesDto, ApiError> {
    let url = format!(
        "/api/sites/{}/pages?type={}&visibility={}&page={}&per_page={}",
        subdomain, kind, visibility, page, per_page
    );
    fetch_json(get(&url)).await
}

pub async fn delete_page(page_id: i32) -> Result<(), ApiError> {
    fetch_empty(delete(&format!("/api/pages/{}", page_id))).await
}

pub async fn get_notes(handle: &str, take: u64) -> Result<NotesDto, ApiError> {
    fetch_json(get(&format!("/api/sites/{}/notes?take={}", handle, take))).await
}

pub async fn get_note(handle: &str, note_id: &str) -> Result<NoteDto, ApiError> {
    fetch_json(get(&format!("/api/sites/{}/notes/{}", handle, note_id))).await
}
