use murmuration::{Flock, FlockError};

fn main() -> Result<(), FlockError> {
    Flock::new()
        .with_grid(256, 256)
        .with_bounds(256.0)
        .with_point_size(2.0)
        .with_title("Murmuration")
        .run()
}
