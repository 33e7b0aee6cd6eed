//! Fail-fast join of two fallible futures

use std::future::Future;

/// Await both futures, returning both values or the first error
///
/// As soon as either future resolves to `Err` the other is dropped and the
/// error is returned. Both run concurrently on the current task.
pub async fn join_first_failure<A, B, T, U, E>(a: A, b: B) -> Result<(T, U), E>
where
    A: Future<Output = Result<T, E>>,
    B: Future<Output = Result<U, E>>,
{
    tokio::pin!(a);
    tokio::pin!(b);

    let mut left: Option<T> = None;
    let mut right: Option<U> = None;

    loop {
        match (left.take(), right.take()) {
            (Some(l), Some(r)) => return Ok((l, r)),
            (l, r) => {
                left = l;
                right = r;
            }
        }

        tokio::select! {
            res = &mut a, if left.is_none() => left = Some(res?),
            res = &mut b, if right.is_none() => right = Some(res?),
        }
    }
}
