//! Flip-book pagination engine.
//!
//! A pure function of the character list: given the list (pre-sorted by the
//! caller, normally alphabetically by name) the engine derives the ordered
//! page sequence and resolves navigation targets into page indices. It
//! never mutates store data and holds no resources.
//!
//! Page layout, in order:
//!
//! 1. one front cover;
//! 2. `ceil(n / 12)` table-of-contents pages, each holding a contiguous
//!    slice of up to 12 characters;
//! 3. one blank alignment page when the ToC page count is odd, so the first
//!    character's image page keeps a consistent side in a two-page spread;
//! 4. per character, an image page immediately followed by an info page;
//! 5. one back cover.
//!
//! With zero characters the sequence is empty -- no covers -- and the
//! caller renders a dedicated empty state instead of an empty book.

use serde::Serialize;

use crate::types::DbId;

/// Characters listed per table-of-contents page.
pub const TOC_PAGE_SIZE: usize = 12;

/// Page index of the first table-of-contents page, regardless of how many
/// ToC pages exist. "Jump to contents" always lands here.
pub const TOC_PAGE_INDEX: usize = 1;

/// How many pages behind the current page stay loaded.
pub const FETCH_WINDOW_BEHIND: usize = 2;

/// How many pages ahead of the current page are prefetched. Larger than
/// the backward reach so upcoming spreads load during forward reading.
pub const FETCH_WINDOW_AHEAD: usize = 6;

/// Anything that can appear as a guidebook entry. Implemented by the
/// character list projection in the db crate.
pub trait PageEntry {
    fn id(&self) -> DbId;
}

/// One page of the generated book. Fully derived from the character list;
/// has no identity beyond its position in the sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PageDescriptor<T> {
    FrontCover,
    TableOfContents {
        entries: Vec<T>,
        /// Page number label where the character pages begin. Every ToC
        /// page stores the same value: "jump to page N" labels reference
        /// where characters start, not the ToC page's own position.
        start_page: usize,
    },
    Blank,
    CharacterImage { character_id: DbId },
    CharacterInfo { character_id: DbId },
    BackCover,
}

fn toc_page_count(character_count: usize) -> usize {
    character_count.div_ceil(TOC_PAGE_SIZE)
}

/// Index of the first character image page for a book with `toc_pages`
/// table-of-contents pages: front cover, the ToC pages, plus the blank
/// alignment page when the ToC count is odd.
pub fn first_character_page(toc_pages: usize) -> usize {
    1 + toc_pages + (toc_pages % 2)
}

/// Build the full page sequence for the given character list.
pub fn build_page_list<T>(characters: &[T]) -> Vec<PageDescriptor<T>>
where
    T: PageEntry + Clone,
{
    if characters.is_empty() {
        return Vec::new();
    }

    let toc_pages = toc_page_count(characters.len());
    let start_page = first_character_page(toc_pages);

    let mut pages = Vec::with_capacity(2 + start_page + characters.len() * 2);
    pages.push(PageDescriptor::FrontCover);

    for chunk in characters.chunks(TOC_PAGE_SIZE) {
        pages.push(PageDescriptor::TableOfContents {
            entries: chunk.to_vec(),
            start_page,
        });
    }

    if toc_pages % 2 == 1 {
        pages.push(PageDescriptor::Blank);
    }

    for character in characters {
        pages.push(PageDescriptor::CharacterImage {
            character_id: character.id(),
        });
        pages.push(PageDescriptor::CharacterInfo {
            character_id: character.id(),
        });
    }

    pages.push(PageDescriptor::BackCover);
    pages
}

/// Resolve a jump to the given character's image page.
///
/// Returns `None` when the id is not in the list; callers treat that as a
/// no-op rather than an error.
pub fn character_page_index<T: PageEntry>(characters: &[T], id: DbId) -> Option<usize> {
    let k = characters.iter().position(|c| c.id() == id)?;
    let toc_pages = toc_page_count(characters.len());
    Some(first_character_page(toc_pages) + 2 * k)
}

/// Whether a page's detail data should be fetched given the current page.
///
/// Pages outside `[current - 2, current + 6]` render a placeholder and
/// issue no data requests.
pub fn in_fetch_window(page_index: usize, current_page: usize) -> bool {
    let lo = current_page.saturating_sub(FETCH_WINDOW_BEHIND);
    page_index >= lo && page_index <= current_page + FETCH_WINDOW_AHEAD
}
