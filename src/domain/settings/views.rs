use super::bus::Subscription;
use super::model::SiteSettings;
use super::store::SettingsStore;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;

/// A mounted projection of the site settings.
///
/// Subscribes on mount; every notification makes it re-read
/// [`SettingsStore::get`] and recompute its value. Dropping the view
/// unsubscribes and stops the refresh task.
pub struct LiveView<T> {
    state: watch::Receiver<(u64, T)>,
    refresher: JoinHandle<()>,
    _subscription: Subscription,
}

impl<T> LiveView<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub async fn mount(store: Arc<SettingsStore>, project: fn(&SiteSettings) -> T) -> Self {
        let wake = Arc::new(Notify::new());
        let subscription = {
            let wake = wake.clone();
            store.subscribe(move || wake.notify_one())
        };

        let initial = project(&store.get().await);
        let (tx, state) = watch::channel((0, initial));

        let refresher = tokio::spawn(async move {
            let mut generation = 0;
            loop {
                wake.notified().await;
                let settings = store.get().await;
                generation += 1;
                if tx.send((generation, project(&settings))).is_err() {
                    break;
                }
            }
        });

        Self {
            state,
            refresher,
            _subscription: subscription,
        }
    }

    pub fn current(&self) -> T {
        self.state.borrow().1.clone()
    }

    /// How many times the view has refreshed since mount.
    pub fn refreshes(&self) -> u64 {
        self.state.borrow().0
    }

    /// Wait until the view has refreshed more than `seen` times.
    pub async fn refreshed_after(&self, seen: u64) -> T {
        let mut state = self.state.clone();
        state
            .wait_for(|(generation, _)| *generation > seen)
            .await
            .map(|value| value.1.clone())
            .unwrap_or_else(|_| self.current())
    }
}

impl<T> Drop for LiveView<T> {
    fn drop(&mut self) {
        self.refresher.abort();
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    pub site_title: String,
    pub show_tiktok: bool,
    pub show_fake_sora: bool,
    pub show_login: bool,
    pub show_pricing: bool,
}

impl NavigationView {
    pub fn project(settings: &SiteSettings) -> Self {
        Self {
            site_title: settings.branding.site_title.clone(),
            show_tiktok: settings.navigation.show_tiktok,
            show_fake_sora: settings.navigation.show_fake_sora,
            show_login: settings.navigation.show_login,
            show_pricing: settings.navigation.show_pricing,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub main_title: String,
    pub subtitle: String,
    pub description: String,
    pub accent_color: String,
}

impl HeroView {
    pub fn project(settings: &SiteSettings) -> Self {
        Self {
            main_title: settings.homepage.main_title.clone(),
            subtitle: settings.homepage.subtitle.clone(),
            description: settings.homepage.description.clone(),
            accent_color: settings.branding.accent_color.clone(),
        }
    }
}

/// Present only while the announcement is enabled.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementBanner {
    pub text: String,
    pub bg_color: String,
}

impl AnnouncementBanner {
    pub fn project(settings: &SiteSettings) -> Option<Self> {
        settings.announcement.enabled.then(|| Self {
            text: settings.announcement.text.clone(),
            bg_color: settings.announcement.bg_color.clone(),
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSnapshot {
    pub navigation: NavigationView,
    pub hero: HeroView,
    pub announcement: Option<AnnouncementBanner>,
}

/// The public page's settings-driven surfaces, each mounted independently.
pub struct SiteSurfaces {
    pub navigation: LiveView<NavigationView>,
    pub hero: LiveView<HeroView>,
    pub announcement: LiveView<Option<AnnouncementBanner>>,
}

impl SiteSurfaces {
    pub async fn mount(store: Arc<SettingsStore>) -> Self {
        Self {
            navigation: LiveView::mount(store.clone(), NavigationView::project).await,
            hero: LiveView::mount(store.clone(), HeroView::project).await,
            announcement: LiveView::mount(store, AnnouncementBanner::project).await,
        }
    }

    pub fn snapshot(&self) -> SiteSnapshot {
        SiteSnapshot {
            navigation: self.navigation.current(),
            hero: self.hero.current(),
            announcement: self.announcement.current(),
        }
    }
}
