pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Name and length of each ship in the classic fleet.
pub const STANDARD_FLEET: [(&str, usize); NUM_SHIPS] = [
    ("Carrier", 5),
    ("Battleship", 4),
    ("Cruiser", 3),
    ("Submarine", 3),
    ("Destroyer", 2),
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;
