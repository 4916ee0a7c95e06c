use tooltip_rs::engine::tolerance::{
    DYNAMIC_NEARBY_SERIES_MULTIPLIER, INCREASE_NEARBY_SERIES_MULTIPLIER, SHOW_FEWER_SERIES_LIMIT,
    y_buffer,
};

#[test]
fn returns_area_to_search_for_nearby_series() {
    // 10 series: 30 / 10 = 3 ticks worth of range.
    assert_eq!(y_buffer(1.0, 10, false), 3.0);
}

#[test]
fn show_all_widens_to_entire_canvas() {
    assert_eq!(y_buffer(1.0, 10, true), 10.0);
}

#[test]
fn reduces_area_to_search_when_many_series() {
    // 30 / 1000 would be tiny; the floor of 0.3 ticks wins.
    assert_eq!(y_buffer(1.0, 1000, false), 0.3);
}

#[test]
fn scales_with_larger_interval() {
    assert_eq!(y_buffer(10.0, 10, false), 30.0);
    assert_eq!(y_buffer(10.0, 10, true), 100.0);
    assert_eq!(y_buffer(10.0, 1000, false), 3.0);
}

#[test]
fn few_series_get_generous_fixed_window() {
    assert_eq!(y_buffer(1.0, 3, false), INCREASE_NEARBY_SERIES_MULTIPLIER);
    assert_eq!(y_buffer(2.0, 1, false), 11.0);
}

#[test]
fn shrink_starts_just_past_the_limit() {
    let at_limit = y_buffer(1.0, SHOW_FEWER_SERIES_LIMIT, false);
    let past_limit = y_buffer(1.0, SHOW_FEWER_SERIES_LIMIT + 1, false);
    assert_eq!(at_limit, INCREASE_NEARBY_SERIES_MULTIPLIER);
    assert_eq!(past_limit, DYNAMIC_NEARBY_SERIES_MULTIPLIER / 6.0);
}
