/// Paginated film list state
///
/// [`PageLoader`] holds everything one list screen knows: the films accumulated
/// so far, the page cursor, whether more pages may exist, the in-flight flag and
/// the search filter. It never performs I/O. A load is split into
/// [`PageLoader::begin_load`] (sets the in-flight flag, hands out a
/// [`LoadTicket`]) and [`PageLoader::complete_load`] (applies the result), so the
/// one-load-at-a-time rule holds however the caller schedules the request.
use crate::{error::AppError, models::Film};

/// Proof that a load was started, required to apply its result
///
/// Each ticket identifies exactly one load and is consumed when that load is
/// completed or abandoned.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    page: u32,
    page_size: u32,
}

impl LoadTicket {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

/// Why a load was not started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRejection {
    /// Another load is in flight
    Busy,
    /// A short page already arrived
    Exhausted,
    /// The screen owning the loader is gone
    TornDown,
    /// Page numbers start at 1 and page sizes must be positive
    InvalidRequest,
}

/// Result of a load attempt as seen by the screen
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded {
        page: u32,
        received: usize,
        has_more: bool,
    },
    /// No credential in the session store; nothing was requested
    NoCredential,
    Rejected(LoadRejection),
    /// Transport or status failure; cursor and has-more are unchanged
    Failed(AppError),
    /// Completion did not belong to the load in flight (or arrived after
    /// teardown) and was dropped
    Discarded,
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Scroll position of a list, in the list's own length unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top
    pub offset: f64,
    /// Visible length of the list
    pub viewport_len: f64,
    /// Total length of rendered content
    pub content_len: f64,
}

impl ScrollMetrics {
    /// True once the remaining content is within `threshold` viewports of the end
    pub fn near_end(&self, threshold: f64) -> bool {
        let remaining = self.content_len - (self.offset + self.viewport_len);
        remaining <= threshold * self.viewport_len
    }
}

#[derive(Debug)]
pub struct PageLoader {
    page_size: u32,
    films: Vec<Film>,
    /// Indices into `films` that match `search_text`, in accumulation order
    visible: Vec<usize>,
    search_text: String,
    search_needle: String,
    last_loaded_page: Option<u32>,
    has_more: bool,
    /// Sequence number of the load in flight
    in_flight: Option<u64>,
    next_seq: u64,
    torn_down: bool,
}

impl PageLoader {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            films: Vec::new(),
            visible: Vec::new(),
            search_text: String::new(),
            search_needle: String::new(),
            last_loaded_page: None,
            has_more: true,
            in_flight: None,
            next_seq: 0,
            torn_down: false,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Last page loaded successfully, 1 before any load
    pub fn cursor(&self) -> u32 {
        self.last_loaded_page.unwrap_or(1)
    }

    /// Page that [`PageLoader::begin_next_page`] would request
    pub fn next_page(&self) -> u32 {
        self.last_loaded_page.map_or(1, |page| page.saturating_add(1))
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Every film accumulated so far
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// Films matching the current search text
    pub fn visible(&self) -> impl Iterator<Item = &Film> + '_ {
        self.visible.iter().map(|&idx| &self.films[idx])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Replaces the search text and recomputes the visible films
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.search_needle = self.search_text.to_lowercase();
        self.visible = self
            .films
            .iter()
            .enumerate()
            .filter(|(_, film)| film.title_contains(&self.search_needle))
            .map(|(idx, _)| idx)
            .collect();
    }

    /// Marks a load of `page` as in flight
    pub fn begin_load(
        &mut self,
        page: u32,
        page_size: u32,
    ) -> Result<LoadTicket, LoadRejection> {
        if self.torn_down {
            return Err(LoadRejection::TornDown);
        }
        if self.in_flight.is_some() {
            return Err(LoadRejection::Busy);
        }
        if page == 0 || page_size == 0 {
            return Err(LoadRejection::InvalidRequest);
        }

        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.in_flight = Some(seq);
        Ok(LoadTicket {
            seq,
            page,
            page_size,
        })
    }

    /// Starts the load of the page after the cursor, if more pages may exist
    pub fn begin_next_page(&mut self) -> Result<LoadTicket, LoadRejection> {
        if self.torn_down {
            return Err(LoadRejection::TornDown);
        }
        if self.in_flight.is_some() {
            return Err(LoadRejection::Busy);
        }
        if !self.has_more {
            return Err(LoadRejection::Exhausted);
        }
        self.begin_load(self.next_page(), self.page_size)
    }

    /// Releases the in-flight flag without applying anything
    ///
    /// Used when a started load turns out to have no credential to send.
    pub fn abandon_load(&mut self, ticket: LoadTicket) {
        if self.owns(&ticket) {
            self.in_flight = None;
        }
    }

    fn owns(&self, ticket: &LoadTicket) -> bool {
        self.in_flight == Some(ticket.seq)
    }

    /// Applies the result of the load identified by `ticket`
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Film>, AppError>,
    ) -> LoadOutcome {
        if !self.owns(&ticket) {
            tracing::debug!(
                page = ticket.page,
                torn_down = self.torn_down,
                "Dropping completion of a load that is not in flight"
            );
            return LoadOutcome::Discarded;
        }

        self.in_flight = None;

        let films = match result {
            Ok(films) => films,
            Err(e) => return LoadOutcome::Failed(e),
        };

        let received = films.len();
        if received < ticket.page_size as usize {
            self.has_more = false;
        }

        let first_new = self.films.len();
        self.films.extend(films);
        for idx in first_new..self.films.len() {
            if self.films[idx].title_contains(&self.search_needle) {
                self.visible.push(idx);
            }
        }

        let cursor = self.last_loaded_page.map_or(ticket.page, |p| p.max(ticket.page));
        self.last_loaded_page = Some(cursor);

        LoadOutcome::Loaded {
            page: ticket.page,
            received,
            has_more: self.has_more,
        }
    }

    /// Invalidates outstanding tickets; later completions are discarded
    pub fn teardown(&mut self) {
        self.in_flight = None;
        self.torn_down = true;
    }
}
