//! Dial bookkeeping
//!
//! A dial pairs a motor with its homing sensor, plus the two scratch
//! positions the calibration sweep records sensor edges into.

/// Number of dials on the clock
pub const NUM_DIALS: usize = 2;

/// Dial identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialId {
    /// Time-of-day dial (dial 0)
    Time,
    /// Rete star-pointer dial (dial 1)
    Rete,
}

impl DialId {
    /// All dials, in calibration order
    pub const ALL: [DialId; NUM_DIALS] = [DialId::Time, DialId::Rete];

    /// Index into the clock's dial array
    pub fn index(self) -> usize {
        match self {
            DialId::Time => 0,
            DialId::Rete => 1,
        }
    }
}

/// One motor-and-sensor pair producing one angular display
///
/// Either handle may be absent: a dial with no motor is inert (all position
/// commands are no-ops) and a dial with no sensor can never complete
/// calibration.
pub struct Dial<M, S> {
    pub(crate) motor: Option<M>,
    pub(crate) sensor: Option<S>,
    /// Earliest high-to-low sensor edge found during the current sweep
    pub(crate) p1: i32,
    /// Latest low-to-high sensor edge found during the current sweep
    pub(crate) p2: i32,
}

impl<M, S> Dial<M, S> {
    /// Create a dial from whatever hardware was discovered
    pub fn new(motor: Option<M>, sensor: Option<S>) -> Self {
        Self {
            motor,
            sensor,
            p1: 0,
            p2: 0,
        }
    }

    /// Create a fully wired dial
    pub fn wired(motor: M, sensor: S) -> Self {
        Self::new(Some(motor), Some(sensor))
    }

    /// Create a dial with no hardware attached
    pub fn unwired() -> Self {
        Self::new(None, None)
    }

    /// Whether a motor is attached
    pub fn has_motor(&self) -> bool {
        self.motor.is_some()
    }

    /// Whether a homing sensor is attached
    pub fn has_sensor(&self) -> bool {
        self.sensor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_id_index() {
        assert_eq!(DialId::Time.index(), 0);
        assert_eq!(DialId::Rete.index(), 1);
        assert_eq!(DialId::ALL[0], DialId::Time);
        assert_eq!(DialId::ALL[1], DialId::Rete);
    }

    #[test]
    fn test_unwired_dial() {
        let dial: Dial<(), ()> = Dial::unwired();
        assert!(!dial.has_motor());
        assert!(!dial.has_sensor());
    }
}
