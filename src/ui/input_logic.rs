use heapless::String;

/// Move selection cursor one item up.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Move selection cursor one item down if another item exists.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        selected
    }
}

/// Scroll offset that keeps `selected` inside a window of `per_page` rows.
///
/// Moves the window as little as possible. A zero page size is treated as
/// one row.
pub fn scroll_into_view(selected: usize, scroll_offset: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    if selected < scroll_offset {
        selected
    } else if selected >= scroll_offset + per_page {
        selected + 1 - per_page
    } else {
        scroll_offset
    }
}

/// Scrollbar thumb, relative to the top of its track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thumb {
    pub offset: i32,
    pub height: i32,
}

/// Thumb geometry for a list of `total` rows showing `per_page` at a time.
///
/// `None` when everything fits and no scrollbar is needed.
pub fn scrollbar_thumb(
    total: usize,
    per_page: usize,
    scroll_offset: usize,
    track_len: i32,
    min_thumb: i32,
) -> Option<Thumb> {
    if total <= per_page {
        return None;
    }

    let height = (track_len * per_page as i32 / total as i32)
        .max(min_thumb)
        .min(track_len);
    let travel = track_len - height;
    let offset = travel * scroll_offset as i32 / (total - per_page) as i32;

    Some(Thumb {
        offset: offset.min(travel),
        height,
    })
}

/// Copy `text`, cutting it to `max_chars` characters.
///
/// When it had to be cut, the last three kept characters become "...".
/// Text that already fits is returned unchanged. `max_chars` is further
/// bounded by the capacity `N`.
pub fn truncate_with_ellipsis<const N: usize>(text: &str, max_chars: usize) -> String<N> {
    let max_chars = max_chars.min(N);
    let mut out = String::new();

    if text.chars().count() <= max_chars {
        for c in text.chars() {
            if out.push(c).is_err() {
                break;
            }
        }
        return out;
    }

    let dots = max_chars.min(3);
    for c in text.chars().take(max_chars - dots) {
        if out.push(c).is_err() {
            break;
        }
    }
    for _ in 0..dots {
        let _ = out.push('.');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_boundaries() {
        assert_eq!(select_prev(0), 0);
        assert_eq!(select_prev(3), 2);
        assert_eq!(select_next(0, 1), 0);
        assert_eq!(select_next(0, 3), 1);
        assert_eq!(select_next(2, 3), 2);
        assert_eq!(select_next(0, 0), 0);
    }

    #[test]
    fn scroll_follows_selection_downwards() {
        assert_eq!(scroll_into_view(0, 0, 2), 0);
        assert_eq!(scroll_into_view(1, 0, 2), 0);
        assert_eq!(scroll_into_view(2, 0, 2), 1);
        assert_eq!(scroll_into_view(3, 1, 2), 2);
    }

    #[test]
    fn scroll_follows_selection_upwards() {
        assert_eq!(scroll_into_view(1, 2, 2), 1);
        assert_eq!(scroll_into_view(0, 1, 2), 0);
        assert_eq!(scroll_into_view(2, 1, 2), 1);
    }

    #[test]
    fn zero_page_size_acts_as_one_row() {
        assert_eq!(scroll_into_view(3, 0, 0), 3);
        assert_eq!(scroll_into_view(3, 3, 0), 3);
    }

    #[test]
    fn no_scrollbar_when_everything_fits() {
        assert_eq!(scrollbar_thumb(4, 4, 0, 499, 30), None);
        assert_eq!(scrollbar_thumb(4, 6, 0, 499, 30), None);
        assert_eq!(scrollbar_thumb(0, 0, 0, 499, 30), None);
    }

    #[test]
    fn thumb_is_proportional_and_travels_the_track() {
        // 4 rows, 2 visible, track 160: thumb is half the track.
        let top = scrollbar_thumb(4, 2, 0, 160, 30).unwrap();
        assert_eq!(top, Thumb { offset: 0, height: 80 });

        let middle = scrollbar_thumb(4, 2, 1, 160, 30).unwrap();
        assert_eq!(middle, Thumb { offset: 40, height: 80 });

        let bottom = scrollbar_thumb(4, 2, 2, 160, 30).unwrap();
        assert_eq!(bottom.offset + bottom.height, 160);
    }

    #[test]
    fn thumb_has_a_minimum_size() {
        let thumb = scrollbar_thumb(100, 1, 0, 160, 30).unwrap();
        assert_eq!(thumb.height, 30);

        let last = scrollbar_thumb(100, 1, 99, 160, 30).unwrap();
        assert_eq!(last.offset, 130);
    }

    #[test]
    fn thumb_never_exceeds_a_tiny_track() {
        let thumb = scrollbar_thumb(4, 2, 2, 10, 30).unwrap();
        assert_eq!(thumb, Thumb { offset: 0, height: 10 });
    }

    #[test]
    fn short_text_is_unmodified() {
        let s: String<64> = truncate_with_ellipsis("About this app", 50);
        assert_eq!(s.as_str(), "About this app");

        let exact: String<64> = truncate_with_ellipsis("abcdef", 6);
        assert_eq!(exact.as_str(), "abcdef");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        let s: String<64> = truncate_with_ellipsis("abcdefgh", 6);
        assert_eq!(s.as_str(), "abc...");
        assert_eq!(s.chars().count(), 6);
    }

    #[test]
    fn truncation_is_bounded_by_capacity() {
        let long = "x".repeat(100);
        let s: String<8> = truncate_with_ellipsis(&long, 59);
        assert_eq!(s.as_str(), "xxxxx...");
    }

    #[test]
    fn tiny_limits_degrade_to_dots() {
        let two: String<8> = truncate_with_ellipsis("abcdef", 2);
        assert_eq!(two.as_str(), "..");
        let zero: String<8> = truncate_with_ellipsis("abcdef", 0);
        assert_eq!(zero.as_str(), "");
    }
}
