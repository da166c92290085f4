use termstage::core::InputQueue;
use termstage::types::InputEvent;

fn ev(name: &str) -> InputEvent {
    InputEvent::named(name)
}

#[test]
fn fifo_order_with_room_to_spare() {
    let mut q = InputQueue::new(usize::MAX);
    q.push(ev("e1"));
    q.push(ev("e2"));
    q.push(ev("e3"));

    assert_eq!(q.pop_one(), Some(ev("e1")));
    assert_eq!(q.pop_one(), Some(ev("e2")));
}

#[test]
fn capacity_two_drops_oldest() {
    let mut q = InputQueue::new(2);
    q.push(ev("e1"));
    q.push(ev("e2"));
    q.push(ev("e3"));

    assert_eq!(q.pop_one(), Some(ev("e2")));
}

#[test]
fn burst_between_pops_with_zero_capacity() {
    let mut q = InputQueue::new(0);
    q.push(ev("up"));
    q.push(ev("down"));
    assert_eq!(q.pop_one(), Some(ev("down")));
    assert_eq!(q.pop_one(), None);

    q.push(ev("return"));
    assert_eq!(q.pop_one(), Some(ev("return")));
}

#[test]
fn raw_payload_survives_the_queue() {
    let mut q = InputQueue::new(1);
    q.push(InputEvent::named("a").with_raw("A"));
    let e = q.pop_one().unwrap();
    assert_eq!(e.name, "a");
    assert_eq!(e.raw.as_deref(), Some("A"));
}
