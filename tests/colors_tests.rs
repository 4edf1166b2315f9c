use torcia::models::owner::Owner;
use torcia::utils::colors::{paint_dim, paint_owner, paint_today};
use torcia::utils::table::visible_width;

#[test]
fn test_today_is_blue() {
    let s = paint_today("20/06/2024");
    assert!(s.starts_with("\x1b[34m"), "{s:?}");
    assert!(s.ends_with("\x1b[0m"));
    assert_eq!(visible_width(&s), 10);
}

#[test]
fn test_dim_uses_grey_palette_entry() {
    let s = paint_dim("lunedì");
    assert!(s.starts_with("\x1b[38;5;8m"), "{s:?}");
    assert_eq!(visible_width(&s), 6);
}

#[test]
fn test_owners_get_distinct_colours() {
    let first = paint_owner(Owner::First, "Bosca");
    let second = paint_owner(Owner::Second, "Bosca");
    assert_ne!(first, second);
    assert_eq!(visible_width(&first), 5);
}
