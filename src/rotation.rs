/// Clockwise rotation in degrees, made of quarter-turns (x, y) -> (y, -x)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn apply(self, (x, y): (i32, i32)) -> (i32, i32) {
        match self {
            Rotation::R0 => (x, y),
            Rotation::R90 => (y, -x),
            Rotation::R180 => (-x, -y),
            Rotation::R270 => (-y, x),
        }
    }
}

/// An element of the dihedral group of the square: an optional reflection
/// across the X axis followed by a rotation
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Symmetry {
    pub reflected: bool,
    pub rotation: Rotation,
}

impl Symmetry {
    pub const IDENTITY: Symmetry = Symmetry {
        reflected: false,
        rotation: Rotation::R0,
    };

    /// All 8 symmetries, in the order the orbit of a polyomino is walked:
    /// the four rotations, then the four rotations of the mirror image
    pub const ORBIT: [Symmetry; 8] = [
        Symmetry { reflected: false, rotation: Rotation::R0 },
        Symmetry { reflected: false, rotation: Rotation::R90 },
        Symmetry { reflected: false, rotation: Rotation::R180 },
        Symmetry { reflected: false, rotation: Rotation::R270 },
        Symmetry { reflected: true, rotation: Rotation::R0 },
        Symmetry { reflected: true, rotation: Rotation::R90 },
        Symmetry { reflected: true, rotation: Rotation::R180 },
        Symmetry { reflected: true, rotation: Rotation::R270 },
    ];

    pub fn apply(self, (x, y): (i32, i32)) -> (i32, i32) {
        let cell = if self.reflected { (x, -y) } else { (x, y) };
        self.rotation.apply(cell)
    }
}
