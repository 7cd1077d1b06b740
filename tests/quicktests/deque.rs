use ordkit::deque::{ArrayDeque, OverflowMode};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn silent_return_never_exceeds_usable_slots(xs: Vec<u8>) -> bool {
    let mut deque = ArrayDeque::<u8, 10>::with_mode(OverflowMode::SilentReturn);
    let accepted = xs.iter().filter(|x| deque.push_back(**x)).count();

    accepted == xs.len().min(9)
        && deque.len() == accepted
        && deque.iter().eq(xs.iter().take(9))
}

#[quickcheck]
fn pushing_front_reverses(xs: Vec<u8>) -> bool {
    let mut deque = ArrayDeque::<u8, 32>::new();
    let xs: Vec<u8> = xs.into_iter().take(31).collect();
    for x in &xs {
        deque.push_front(*x);
    }

    let mut popped = Vec::new();
    while let Some(x) = deque.pop_back() {
        popped.push(x);
    }
    popped == xs
}
