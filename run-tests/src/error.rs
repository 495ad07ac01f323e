use std::io;

use thiserror::Error;

use crate::kind::RmqKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unrecognized RMQ type: {0} (check your spelling?)")]
    UnknownRmq(String),
    #[error(
        "{rmq} returned {answer} for [{low}, {high}) on {n} elements, which is out of bounds"
    )]
    OutOfBounds {
        rmq: RmqKind,
        n: usize,
        low: usize,
        high: usize,
        answer: usize,
    },
    #[error(
        "{rmq} returned {theirs} (value {their_value}) for [{low}, {high}) on {n} elements, \
         but the minimum is {our_value} at {ours}"
    )]
    WrongAnswer {
        rmq: RmqKind,
        n: usize,
        low: usize,
        high: usize,
        ours: usize,
        our_value: i32,
        theirs: usize,
        their_value: i32,
    },
    #[error("failed to write the report: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
