/// Post category as stored in the `post_type` column: who authored the post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A driver offering a ride or transport service.
    Offer,
    /// A passenger looking for a ride (or to send goods).
    Request,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Offer => "offer",
            Category::Request => "request",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QueueSnapshot {
    pub pending: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_storage_form_is_lowercase() {
        assert_eq!(Category::Offer.as_str(), "offer");
        assert_eq!(Category::Request.as_str(), "request");
    }
}
