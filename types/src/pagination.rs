/// Records per page. The listing API is always asked for exactly this many.
pub const PAGE_SIZE: u32 = 20;

/// Query parameters for one page of `list_users.php`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u64,
}

impl PageRequest {
    /// Request for a 1-based page. Page 0 is treated as page 1.
    pub fn for_page(page: u32) -> Self {
        Self {
            limit: PAGE_SIZE,
            offset: u64::from(page.saturating_sub(1)) * u64::from(PAGE_SIZE),
        }
    }
}

pub fn total_pages(total: u64) -> u32 {
    u32::try_from(total.div_ceil(u64::from(PAGE_SIZE))).unwrap_or(u32::MAX)
}

/// Viewport classification used to pick the layout and the pagination window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    #[default]
    Wide,
}

impl Viewport {
    /// Widths below this many CSS pixels are narrow.
    pub const BREAKPOINT_PX: u32 = 768;

    pub fn from_narrow(narrow: bool) -> Self {
        if narrow {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Viewport::Narrow
    }

    /// How many page buttons the pagination bar shows at most.
    pub fn window(self) -> u32 {
        match self {
            Viewport::Narrow => 3,
            Viewport::Wide => 7,
        }
    }
}

/// Page buttons to render: a contiguous run around `current`, slid left when it
/// would run past the last page.
pub fn page_numbers(current: u32, total_pages: u32, viewport: Viewport) -> Vec<u32> {
    let window = viewport.window();

    let mut start = current.saturating_sub(window / 2).max(1);
    let end = total_pages.min(start + window - 1);
    if end + 1 < start + window {
        start = (end + 1).saturating_sub(window).max(1);
    }

    (start..=end).collect()
}

pub fn has_previous(current: u32) -> bool {
    current > 1
}

pub fn has_next(current: u32, total_pages: u32) -> bool {
    current < total_pages
}

/// What a click on a page button should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Outside `1..=total_pages`; nothing happens.
    Ignore,
    /// Already on that page: scroll up without reloading.
    Stay,
    /// Load this page.
    Switch(u32),
}

impl Navigation {
    pub fn scrolls(self) -> bool {
        !matches!(self, Navigation::Ignore)
    }
}

pub fn navigate(current: u32, requested: u32, total_pages: u32) -> Navigation {
    if !(1..=total_pages).contains(&requested) {
        Navigation::Ignore
    } else if requested == current {
        Navigation::Stay
    } else {
        Navigation::Switch(requested)
    }
}
