/// B3/S23: state of a cell in the next generation given its current state
/// and the number of alive cells around it.
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (false, 3) => true,
        (false, _) => false,
        (true, 2 | 3) => true,
        (true, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::next_state;

    #[test]
    fn test_dead_cell_is_born_only_with_three() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3, "n={}", n);
        }
    }

    #[test]
    fn test_alive_cell_survives_with_two_or_three() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "n={}", n);
        }
    }
}
