// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cancellation of in-flight Kubernetes calls and waits

use crate::error::{InstallError, Result};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Run `fut` unless `token` is cancelled first.
///
/// Cancellation wins over a ready result, so an already cancelled token
/// never lets the future make progress.
pub async fn cancellable<F, T>(token: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(InstallError::Cancelled),
        res = fut => res,
    }
}
