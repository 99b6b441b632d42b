//! Provider context shared by canonical pull request records.

use url::Url;

/// Remote code-hosting provider that a pull request belongs to.
///
/// Records hold only a weak back-reference to their provider so that later
/// API calls can be routed to the right remote without the record owning it.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteProvider: Send + Sync {
    /// Stable provider identifier, e.g. `gitlab`.
    fn id(&self) -> &str;

    /// Human readable provider name.
    fn name(&self) -> &str;

    /// Host serving the project, including a non-default port.
    fn domain(&self) -> &str;

    /// Project path on the host, e.g. `group/subgroup/project`.
    fn path(&self) -> &str;

    /// Base URL of the provider's REST API.
    fn api_base(&self) -> &Url;
}
