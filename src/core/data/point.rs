/// Integer pixel coordinates. `y` grows downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
