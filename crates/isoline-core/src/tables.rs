//! Static marching-squares lookup tables.
//!
//! Cell corners are numbered clockwise from the top-left:
//!
//! ```text
//!   0 --- 1
//!   |     |
//!   3 --- 2
//! ```
//!
//! Edges follow the same orientation: 0=TOP (0-1), 1=RIGHT (1-2),
//! 2=BOTTOM (2-3), 3=LEFT (3-0).

/// The two corner indices bounding each edge.
pub const EDGE_CORNERS: [[usize; 2]; 4] = [[0, 1], [1, 2], [2, 3], [3, 0]];

/// Edge-index pairs crossed by the contour for each of the 16 corner
/// configurations, `-1` terminated. Cases 0 and 15 produce no segments;
/// the saddle cases 5 and 10 produce two.
///
/// The saddle pairing is fixed: no center-value disambiguation is applied,
/// so changing these rows silently changes output topology.
pub const EDGE_PAIRS: [[i8; 4]; 16] = [
    [-1, -1, -1, -1], // 0   0000
    [3, 0, -1, -1],   // 1   0001
    [0, 1, -1, -1],   // 2   0010
    [3, 1, -1, -1],   // 3   0011
    [1, 2, -1, -1],   // 4   0100
    [0, 1, 3, 2],     // 5   0101  saddle
    [0, 2, -1, -1],   // 6   0110
    [3, 2, -1, -1],   // 7   0111
    [2, 3, -1, -1],   // 8   1000
    [0, 2, -1, -1],   // 9   1001
    [0, 3, 1, 2],     // 10  1010  saddle
    [1, 2, -1, -1],   // 11  1011
    [3, 1, -1, -1],   // 12  1100
    [0, 1, -1, -1],   // 13  1101
    [3, 0, -1, -1],   // 14  1110
    [-1, -1, -1, -1], // 15  1111
];
