/// Fixed-size page-number pagination. A malformed `page` value falls back to
/// the first page, an out-of-range one clamps to the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: i64,
    pub num_pages: i64,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

pub fn paginate(total: i64, requested: Option<&str>, per_page: i64) -> Page {
    // num_pages is at least 1 so an empty table still has a valid last page
    let num_pages = ((total as f64 / per_page as f64).ceil() as i64).max(1);

    let number = requested
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(1)
        .clamp(1, num_pages);

    Page {
        number,
        num_pages,
        total,
        limit: per_page,
        offset: (number - 1) * per_page,
    }
}
