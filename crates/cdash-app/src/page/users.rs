//! Users page: searchable, paginated user list

use cdash_core::{compute_view, page_window, total_pages, CollectionView, PageEntry, User};

use crate::load_state::LoadState;

/// Longest page number the prompt accepts
pub const MAX_JUMP_DIGITS: usize = 4;

#[derive(Debug, Clone)]
pub struct UsersPage {
    pub load: LoadState<Vec<User>>,
    query: String,
    current_page: usize,
    page_size: usize,
    /// Highlighted row within the current page
    selected: usize,
    /// Digits typed into the page-number prompt
    jump_input: String,
}

impl UsersPage {
    pub fn new(page_size: usize) -> Self {
        Self {
            load: LoadState::Idle,
            query: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
            selected: 0,
            jump_input: String::new(),
        }
    }

    /// Start with a query and page already applied
    pub fn with_view(mut self, query: impl Into<String>, page: usize) -> Self {
        self.query = query.into();
        self.current_page = page.max(1);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn jump_input(&self) -> &str {
        &self.jump_input
    }

    /// Keep at most [`MAX_JUMP_DIGITS`] leading digits of `text`
    pub fn set_jump_input(&mut self, text: &str) {
        self.jump_input = text
            .chars()
            .filter(char::is_ascii_digit)
            .take(MAX_JUMP_DIGITS)
            .collect();
    }

    /// Page number typed into the prompt, if any
    pub fn jump_target(&self) -> Option<usize> {
        self.jump_input.parse().ok()
    }

    /// Replace the search query; any change sends the user back to page 1
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.current_page = 1;
            self.selected = 0;
        }
    }

    /// Current slice of the loaded collection, empty while nothing is loaded
    pub fn view(&self) -> CollectionView<'_> {
        let users: &[User] = self.load.data().map(Vec::as_slice).unwrap_or(&[]);
        compute_view(users, &self.query, self.current_page, self.page_size)
    }

    pub fn total_pages(&self) -> usize {
        self.view().total_pages
    }

    pub fn page_window(&self) -> Vec<PageEntry> {
        page_window(self.current_page, self.total_pages())
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.total_pages());
    }

    /// Jump to `page`, clamped into the pages that exist
    pub fn go_to_page(&mut self, page: usize) {
        let clamped = page.clamp(1, self.total_pages().max(1));
        if clamped != self.current_page {
            self.current_page = clamped;
            self.selected = 0;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.view().page_items.len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Id of the highlighted user, if the current page has one
    pub fn selected_user_id(&self) -> Option<u32> {
        self.view().page_items.get(self.selected).map(|user| user.id)
    }

    /// Keep page and selection valid after the collection was replaced
    pub(crate) fn clamp_to_data(&mut self) {
        let total = total_pages(self.view().filtered_total, self.page_size);
        self.current_page = self.current_page.clamp(1, total.max(1));
        let len = self.view().page_items.len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
