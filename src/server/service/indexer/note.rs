use crate::{
    model::profile::{NoteDto, NotesDto},
    server::{error::AppError, service::indexer::IndexerClient},
};

/// How many notes to scan when resolving a single note by id.
const NOTE_LOOKUP_TAKE: u64 = 100;

/// Read access to a site's published notes on the indexer.
pub struct NoteService<'a> {
    indexer: &'a IndexerClient,
}

impl<'a> NoteService<'a> {
    pub fn new(indexer: &'a IndexerClient) -> Self {
        Self { indexer }
    }

    /// Lists a site's published notes, newest first.
    ///
    /// # Arguments
    /// - `handle` - Site handle on the indexer
    /// - `take` - Upper bound on the number of notes returned
    pub async fn get_notes_by_site(&self, handle: &str, take: u64) -> Result<NotesDto, AppError> {
        let mut notes = self.indexer.get_notes(handle, take).await?;

        notes
            .list
            .sort_by(|a, b| b.date_published.cmp(&a.date_published));

        Ok(notes)
    }

    /// Resolves a single note of a site by id.
    ///
    /// # Returns
    /// - `Ok(Some(NoteDto))` - Note found
    /// - `Ok(None)` - The site has no note with that id
    pub async fn get_note(&self, handle: &str, note_id: &str) -> Result<Option<NoteDto>, AppError> {
        let notes = self.indexer.get_notes(handle, NOTE_LOOKUP_TAKE).await?;

        Ok(notes.list.into_iter().find(|note| note.id == note_id))
    }
}
