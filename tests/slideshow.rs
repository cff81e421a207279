use rollabout::utils::{Direction, Slideshow};

#[test]
fn forward_wraps_from_last_to_first() {
    let mut show = Slideshow::new(vec!["a", "b", "c"]).unwrap();
    show.advance(Direction::Forward);
    show.advance(Direction::Forward);
    assert_eq!(*show.active(), "c");

    show.advance(Direction::Forward);
    assert_eq!(*show.active(), "a");
}

#[test]
fn backward_wraps_from_first_to_last() {
    let mut show = Slideshow::new(vec!["a", "b", "c"]).unwrap();
    assert_eq!(*show.active(), "a");

    show.advance(Direction::Backward);
    assert_eq!(*show.active(), "c");
}

#[test]
fn exactly_one_slide_is_active_at_all_times() {
    let mut show = Slideshow::new(vec![1, 2, 3, 4]).unwrap();
    for _ in 0..9 {
        assert!(show.active_index() < show.len());
        assert_eq!(*show.active(), show.active_index() + 1);
        show.advance(Direction::Forward);
    }
}

#[test]
fn instances_share_nothing() {
    let mut first = Slideshow::new(vec!["a", "b"]).unwrap();
    let second = Slideshow::new(vec!["x", "y"]).unwrap();

    first.advance(Direction::Forward);
    assert_eq!(*first.active(), "b");
    assert_eq!(*second.active(), "x");
}

#[test]
fn empty_slideshow_is_an_error() {
    assert!(Slideshow::<u32>::new(vec![]).is_err());
}
