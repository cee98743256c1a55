use crate::core::pages::{render_about, render_contact_page, render_home, render_shared_hero};
use crate::domain::model::{BootState, PageKind, TransportPolicy};
use crate::domain::ports::{ElementRegistry, TextSource};
use crate::utils::error::Result;

/// Shown in the intro container when a page fails to render.
pub const FALLBACK_MESSAGE: &str =
    "Sivun sisallon latauksessa tapahtui virhe. Yrita paivittaa sivu uudelleen.";

/// Replaces the intro container with the fallback message, if it exists.
pub fn render_fallback<R: ElementRegistry>(dom: &mut R) {
    if let Some(intro) = dom.lookup("intro-text") {
        dom.clear_children(intro);
        dom.append_paragraph(intro, FALLBACK_MESSAGE);
    }
}

/// Renders one page load: the shared hero first, then the page named by the
/// document's marker.
pub struct Renderer<S: TextSource> {
    source: S,
    policy: TransportPolicy,
}

impl<S: TextSource> Renderer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            policy: TransportPolicy::default(),
        }
    }

    pub fn with_policy(source: S, policy: TransportPolicy) -> Self {
        Self { source, policy }
    }

    /// Runs the page load to completion and returns the final state,
    /// `Done` or `Failed`. Content written before a failure is kept; only
    /// the intro container is replaced by the fallback message.
    pub async fn init_page<R: ElementRegistry>(&self, dom: &mut R) -> BootState {
        let mut state = BootState::Idle;

        match self.run(dom, &mut state).await {
            Ok(()) => {
                advance(&mut state, BootState::Done);
                state
            }
            Err(e) => {
                tracing::error!("Page render failed in state {}: {}", state, e);
                advance(&mut state, BootState::Failed);
                render_fallback(dom);
                state
            }
        }
    }

    async fn run<R: ElementRegistry>(&self, dom: &mut R, state: &mut BootState) -> Result<()> {
        advance(state, BootState::HeroLoading);
        render_shared_hero(&self.source, dom, self.policy).await?;

        let page = PageKind::from_marker(dom.page_marker().as_deref());
        advance(state, BootState::PageLoading(page));
        match page {
            PageKind::Home => render_home(&self.source, dom, self.policy).await?,
            PageKind::About => render_about(&self.source, dom, self.policy).await?,
            PageKind::Contact => render_contact_page(&self.source, dom, self.policy).await?,
        }

        tracing::info!("Rendered {} page", page);
        Ok(())
    }
}

fn advance(state: &mut BootState, next: BootState) {
    tracing::debug!("{} -> {}", state, next);
    *state = next;
}

/// Renders `dom` from `source` with the default transport policy.
pub async fn init_page<S, R>(source: S, dom: &mut R) -> BootState
where
    S: TextSource,
    R: ElementRegistry,
{
    Renderer::new(source).init_page(dom).await
}
