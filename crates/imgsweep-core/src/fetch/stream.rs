//! Streaming a 200 response body into the destination file.

use futures::StreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;

use super::error::FetchError;

/// Writes the body of `response` to `dest` and returns the resulting file size.
///
/// On any stream or write failure the partial file is closed and removed.
/// A body that leaves the file empty is removed and reported as
/// [`FetchError::EmptyFile`].
pub(crate) async fn write_body(response: reqwest::Response, dest: &Path) -> Result<u64, FetchError> {
    let mut file = tokio::fs::File::create(dest)
        .await
        .map_err(FetchError::Write)?;

    let copied = copy_body(response, &mut file).await;
    drop(file);
    if let Err(e) = copied {
        discard_partial(dest).await;
        return Err(e);
    }

    // Size on disk is authoritative; an unreadable file counts as empty.
    let size = tokio::fs::metadata(dest)
        .await
        .map(|m| m.len())
        .unwrap_or(0);
    if size == 0 {
        discard_partial(dest).await;
        return Err(FetchError::EmptyFile);
    }
    Ok(size)
}

async fn copy_body(response: reqwest::Response, file: &mut tokio::fs::File) -> Result<(), FetchError> {
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(FetchError::from_reqwest)?;
        file.write_all(&chunk).await.map_err(FetchError::Write)?;
    }
    file.flush().await.map_err(FetchError::Write)?;
    Ok(())
}

/// Removes a partially written file; a file that is already gone is fine.
pub(crate) async fn discard_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("could not remove partial file {}: {}", path.display(), e);
        }
    }
}
