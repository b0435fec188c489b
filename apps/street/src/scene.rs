use crate::annotation::{annotations_for, AnnotationTable};
use crate::domain::RecordKind;

pub const TOTAL_SCENES: usize = 4;

/// The four narrative views, in paging order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    #[default]
    Overview,
    Toothbrushes,
    Beds,
    Families,
}

impl Scene {
    pub const ALL: [Self; TOTAL_SCENES] = [
        Self::Overview,
        Self::Toothbrushes,
        Self::Beds,
        Self::Families,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Overview),
            1 => Some(Self::Toothbrushes),
            2 => Some(Self::Beds),
            3 => Some(Self::Families),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Toothbrushes => 1,
            Self::Beds => 2,
            Self::Families => 3,
        }
    }

    /// Image-grid configuration; the overview has none.
    pub fn config(self) -> Option<&'static SceneConfig> {
        match self {
            Self::Overview => None,
            Self::Toothbrushes => Some(&IMAGE_SCENES[0]),
            Self::Beds => Some(&IMAGE_SCENES[1]),
            Self::Families => Some(&IMAGE_SCENES[2]),
        }
    }
}

/// Everything that differs between the three image-grid scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneConfig {
    pub kind: RecordKind,
    pub title: &'static str,
    pub description: &'static str,
    pub container_id: &'static str,
    /// Noun used in image alt text, e.g. "bedroom from Kenya".
    pub subject: &'static str,
    pub annotations: &'static AnnotationTable,
}

pub static IMAGE_SCENES: [SceneConfig; 3] = [
    SceneConfig {
        kind: RecordKind::Toothbrush,
        title: "Toothbrushes by Income Level",
        description: "Dental hygiene practices and toothbrush quality vary significantly across income levels. From basic manual toothbrushes to advanced electric models, explore how income affects oral care habits and dental hygiene products around the world.",
        container_id: "toothbrush-images",
        subject: "toothbrush",
        annotations: annotations_for(RecordKind::Toothbrush),
    },
    SceneConfig {
        kind: RecordKind::Beds,
        title: "Beds by Income Level",
        description: "Sleeping arrangements and bedroom conditions vary significantly across income levels. From simple sleeping spaces to elaborate bedroom setups, explore how income affects where and how people sleep around the world.",
        container_id: "beds-images",
        subject: "bedroom",
        annotations: annotations_for(RecordKind::Beds),
    },
    SceneConfig {
        kind: RecordKind::Families,
        title: "Families by Income Level",
        description: "Family structures and living conditions vary significantly across income levels. From nuclear families in spacious homes to extended families in compact spaces, explore how different family compositions and economic circumstances shape daily life around the world.",
        container_id: "families-images",
        subject: "family",
        annotations: annotations_for(RecordKind::Families),
    },
];

/// Element ids of the navigation buttons.
pub const PREV_BUTTON: &str = "prev";
pub const NEXT_BUTTON: &str = "next";
pub const HOME_BUTTON: &str = "home";

/// Enabled state of the navigation bar for the current scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub home_disabled: bool,
    /// `None` removes the progress text.
    pub progress: Option<String>,
}

impl NavState {
    /// Every button disabled and no progress; used once loading has failed.
    pub const fn locked() -> Self {
        Self {
            prev_disabled: true,
            next_disabled: true,
            home_disabled: true,
            progress: None,
        }
    }

    /// Each button id paired with whether it is disabled.
    pub const fn buttons(&self) -> [(&'static str, bool); 3] {
        [
            (PREV_BUTTON, self.prev_disabled),
            (NEXT_BUTTON, self.next_disabled),
            (HOME_BUTTON, self.home_disabled),
        ]
    }
}

/// Bounded pager over [`Scene::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneController {
    scene: Scene,
}

impl SceneController {
    pub const fn new() -> Self {
        Self {
            scene: Scene::Overview,
        }
    }

    pub const fn scene(&self) -> Scene {
        self.scene
    }

    pub const fn index(&self) -> usize {
        self.scene.index()
    }

    /// Returns whether the scene changed.
    pub fn next(&mut self) -> bool {
        self.move_to(Scene::from_index(self.index() + 1))
    }

    pub fn previous(&mut self) -> bool {
        self.move_to(self.index().checked_sub(1).and_then(Scene::from_index))
    }

    pub fn home(&mut self) -> bool {
        self.move_to(Some(Scene::Overview))
    }

    fn move_to(&mut self, target: Option<Scene>) -> bool {
        match target {
            Some(scene) if scene != self.scene => {
                log::debug!("scene {:?} -> {:?}", self.scene, scene);
                self.scene = scene;
                true
            }
            _ => false,
        }
    }

    pub fn nav_state(&self) -> NavState {
        let index = self.index();
        NavState {
            prev_disabled: index == 0,
            next_disabled: index == TOTAL_SCENES - 1,
            home_disabled: index == 0,
            progress: Some(format!("{} / {TOTAL_SCENES}", index + 1)),
        }
    }
}
