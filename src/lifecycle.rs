/// What the page shows once `pagehide` has stopped the visualization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterHide {
    /// The document is being discarded.
    Nothing,
    /// The document may come back from the back/forward cache; show the
    /// static fallback so it never returns with a frozen canvas.
    StaticFallback,
}

#[inline]
pub fn after_page_hide(persisted: bool) -> AfterHide {
    if persisted {
        AfterHide::StaticFallback
    } else {
        AfterHide::Nothing
    }
}
