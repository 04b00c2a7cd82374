use ratatui::layout::Rect;

use folio::ui::LayoutManager;

#[test]
fn test_content_column_follows_font_scale() {
    let area = Rect::new(0, 0, 100, 30);

    let normal = LayoutManager::content_column(area, 1.0);
    assert_eq!(normal.width, 70);
    assert_eq!(normal.x, 15);

    let large = LayoutManager::content_column(area, 1.4);
    assert_eq!(large.width, 98);

    let small = LayoutManager::content_column(area, 0.5);
    assert_eq!(small.width, 40);
}

#[test]
fn test_card_grid_drops_cards_that_do_not_fit() {
    let area = Rect::new(0, 0, 60, 12);
    let cards = LayoutManager::card_grid(area, 6, 2, 5);

    // Two full rows of two fit in 12 lines
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[1], Rect::new(30, 0, 30, 5));
    assert_eq!(cards[2], Rect::new(0, 5, 30, 5));
}

#[test]
fn test_contains() {
    let area = Rect::new(2, 3, 4, 2);
    assert!(LayoutManager::contains(area, 2, 3));
    assert!(LayoutManager::contains(area, 5, 4));
    assert!(!LayoutManager::contains(area, 6, 4));
    assert!(!LayoutManager::contains(area, 2, 5));
}

#[test]
fn test_home_layout_stacks_regions() {
    let layout = LayoutManager::home_layout(Rect::new(0, 0, 80, 24));
    assert_eq!(layout.nav_bar.y, 0);
    assert!(layout.content.y > layout.nav_bar.y);
    assert_eq!(layout.footer.bottom(), 24);

    let logo = LayoutManager::footer_logo_area(layout.footer);
    assert_eq!(logo.y, layout.footer.y);
    assert!(logo.width <= layout.footer.width);
}
