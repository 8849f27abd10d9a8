use thiserror::Error;

/// Startup failures. The pose and geometry core is total and has no
/// error modes of its own; everything here comes from window or GPU
/// initialization.
#[derive(Debug, Error)]
pub enum JittoError {
    #[error("surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}
