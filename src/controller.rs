use crate::command::{Command, Effect};
use crate::errors::{ControllerError, QueueError, StackError};
use crate::generator::PieceGenerator;
use crate::piece::{Piece, PieceKind};
use crate::queue::PieceQueue;
use crate::stack::ReserveStack;
use ahash::AHashMap as HashMap;
use log::{debug, trace};
use std::fmt;

/// Which of the two original programs the controller behaves as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyMode {
    /// Auto-refill after every removal; reserve stack enabled.
    Supply,
    /// Direct enqueue/dequeue with no refill; reserve stack disabled.
    Manual,
}

impl fmt::Display for SupplyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SupplyMode::Supply => "supply",
            SupplyMode::Manual => "manual",
        })
    }
}

/// Construction parameters for a [`SupplyController`].
#[derive(Debug, Clone, Copy)]
pub struct SupplyConfig {
    pub queue_capacity: usize,
    pub stack_capacity: usize,
    pub mode: SupplyMode,
}

impl Default for SupplyConfig {
    /// The original programs' dimensions: a 5-piece queue, a 3-piece reserve.
    fn default() -> Self {
        Self {
            queue_capacity: 5,
            stack_capacity: 3,
            mode: SupplyMode::Supply,
        }
    }
}

/// A pure read of both containers, queue front-to-back and stack
/// top-to-bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub queue: Vec<Piece>,
    pub stack: Vec<Piece>,
}

/// Running totals for one controller's lifetime.
#[derive(Debug, Clone, Default)]
pub struct SupplyStats {
    /// Pieces produced by the generator, including the initial fill.
    pub generated: u64,
    pub played: u64,
    pub reserved: u64,
    pub used_from_reserve: u64,
    /// Queue fronts pushed out by a `use_reserved` refill on a full queue.
    pub displaced: u64,
    pub manual_enqueued: u64,
    pub manual_dequeued: u64,
    pub plays_by_kind: HashMap<PieceKind, u64>,
}

/// Orchestrates the queue, the reserve stack, and the generator.
///
/// Owns all session state; independent controllers never share anything.
/// Every operation either fully applies or returns an error with no
/// mutation, and in supply mode the queue length never changes from its
/// capacity once constructed.
#[derive(Debug)]
pub struct SupplyController {
    queue: PieceQueue,
    stack: ReserveStack,
    generator: PieceGenerator,
    mode: SupplyMode,
    stats: SupplyStats,
}

impl SupplyController {
    /// Builds the controller and fills the queue to capacity.
    ///
    /// Both original programs start with a full queue, so the initial fill
    /// happens in both modes. The stack starts empty.
    pub fn new(config: SupplyConfig) -> Self {
        let mut controller = Self {
            queue: PieceQueue::with_capacity(config.queue_capacity),
            stack: ReserveStack::with_capacity(config.stack_capacity),
            generator: PieceGenerator::new(),
            mode: config.mode,
            stats: SupplyStats::default(),
        };

        while !controller.queue.is_full() {
            let piece = controller.generate();
            controller
                .queue
                .enqueue(piece)
                .expect("queue not full inside fill loop");
        }

        debug!(
            "initialized {} mode: queue {}/{}, stack 0/{}",
            controller.mode,
            controller.queue.len(),
            controller.queue.capacity(),
            controller.stack.capacity(),
        );
        controller
    }

    pub fn mode(&self) -> SupplyMode {
        self.mode
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    pub fn stats(&self) -> &SupplyStats {
        &self.stats
    }

    /// Reads both containers without mutating anything.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            queue: self.queue.iter().collect(),
            stack: self.stack.iter().collect(),
        }
    }

    /// Plays the front piece and refills the queue.
    ///
    /// The played piece is gone for good; a fresh piece takes the freed slot
    /// at the tail, so the queue length does not change.
    pub fn play(&mut self) -> Result<Effect, ControllerError> {
        self.require_mode(SupplyMode::Supply, Command::Play)?;

        let piece = self.queue.dequeue()?;
        let refill = self.generate();
        self.queue.enqueue(refill).expect("dequeue freed a slot");

        self.stats.played += 1;
        *self.stats.plays_by_kind.entry(piece.kind()).or_insert(0) += 1;
        debug!("played {piece}, refilled with {refill}");
        Ok(Effect::Played { piece, refill })
    }

    /// Moves the front piece onto the reserve stack and refills the queue.
    ///
    /// The stack is checked before the queue is touched, so a full reserve
    /// rejects the whole operation with nothing mutated.
    pub fn reserve(&mut self) -> Result<Effect, ControllerError> {
        self.require_mode(SupplyMode::Supply, Command::Reserve)?;

        if self.stack.is_full() {
            return Err(StackError::Full {
                capacity: self.stack.capacity(),
            }
            .into());
        }

        let piece = self.queue.dequeue()?;
        self.stack.push(piece).expect("fullness checked above");
        let refill = self.generate();
        self.queue.enqueue(refill).expect("dequeue freed a slot");

        self.stats.reserved += 1;
        debug!("reserved {piece}, refilled with {refill}");
        Ok(Effect::Reserved { piece, refill })
    }

    /// Consumes the top of the reserve stack and refills the queue.
    ///
    /// The popped piece is not requeued. The refill goes to the queue tail;
    /// when the queue is full (the steady state in supply mode) the front
    /// piece is displaced to make room, keeping the length constant.
    pub fn use_reserved(&mut self) -> Result<Effect, ControllerError> {
        self.require_mode(SupplyMode::Supply, Command::UseReserved)?;

        let piece = self.stack.pop()?;
        let refill = self.generate();
        let displaced = self.queue.enqueue_displacing(refill);

        self.stats.used_from_reserve += 1;
        if displaced.is_some() {
            self.stats.displaced += 1;
        }
        debug!("used reserved {piece}, refilled with {refill}, displaced {displaced:?}");
        Ok(Effect::UsedReserve {
            piece,
            refill,
            displaced,
        })
    }

    /// Manual mode: generates a piece and appends it, no removal first.
    ///
    /// Fullness is checked before generating so a rejected insert does not
    /// consume an id.
    pub fn manual_enqueue(&mut self) -> Result<Effect, ControllerError> {
        self.require_mode(SupplyMode::Manual, Command::ManualEnqueue)?;

        if self.queue.is_full() {
            return Err(QueueError::Full {
                capacity: self.queue.capacity(),
            }
            .into());
        }

        let piece = self.generate();
        self.queue.enqueue(piece).expect("fullness checked above");

        self.stats.manual_enqueued += 1;
        debug!("enqueued {piece}");
        Ok(Effect::Enqueued { piece })
    }

    /// Manual mode: removes the front piece with no refill, so the queue can
    /// drain to empty.
    pub fn manual_dequeue(&mut self) -> Result<Effect, ControllerError> {
        self.require_mode(SupplyMode::Manual, Command::ManualDequeue)?;

        let piece = self.queue.dequeue()?;
        self.stats.manual_dequeued += 1;
        debug!("dequeued {piece}");
        Ok(Effect::Dequeued { piece })
    }

    /// Routes a parsed command to the matching operation.
    pub fn dispatch(&mut self, command: Command) -> Result<Effect, ControllerError> {
        match command {
            Command::Play => self.play(),
            Command::Reserve => self.reserve(),
            Command::UseReserved => self.use_reserved(),
            Command::ManualEnqueue => self.manual_enqueue(),
            Command::ManualDequeue => self.manual_dequeue(),
            Command::Quit => Ok(Effect::Quit),
        }
    }

    fn generate(&mut self) -> Piece {
        self.stats.generated += 1;
        let piece = self.generator.generate();
        trace!("generated {piece}");
        piece
    }

    fn require_mode(
        &self,
        expected: SupplyMode,
        command: Command,
    ) -> Result<(), ControllerError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(ControllerError::WrongMode {
                command,
                mode: self.mode,
            })
        }
    }
}

impl Default for SupplyController {
    fn default() -> Self {
        Self::new(SupplyConfig::default())
    }
}
