//! Navigation - which scene of which chapter is on screen

use crate::story::{Chapter, Scene, Story};

/// Position in the story. Both indices are zero-based and always point at an
/// existing scene of the story they are used with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    chapter: usize,
    scene: usize,
}

/// Scenes seen so far out of the whole story.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f32 / self.total as f32
    }
}

impl NavigationState {
    /// First scene of the first chapter
    pub fn start() -> Self {
        Self::default()
    }

    pub fn chapter(&self) -> usize {
        self.chapter
    }

    pub fn scene(&self) -> usize {
        self.scene
    }

    pub fn current_chapter<'s>(&self, story: &'s Story) -> Option<&'s Chapter> {
        story.chapter(self.chapter)
    }

    pub fn current_scene<'s>(&self, story: &'s Story) -> Option<&'s Scene> {
        self.current_chapter(story).and_then(|c| c.scenes.get(self.scene))
    }

    /// Go to the next scene, or the first scene of the next chapter.
    /// Returns false at the end of the story.
    pub fn advance(&mut self, story: &Story) -> bool {
        let scenes = story.chapter(self.chapter).map_or(0, Chapter::scene_count);
        if self.scene + 1 < scenes {
            self.scene += 1;
        } else if self.chapter + 1 < story.chapter_count() {
            self.chapter += 1;
            self.scene = 0;
        } else {
            return false;
        }
        true
    }

    /// Go to the previous scene, or the last scene of the previous chapter.
    /// Returns false at the start of the story.
    pub fn retreat(&mut self, story: &Story) -> bool {
        if self.scene > 0 {
            self.scene -= 1;
        } else if self.chapter > 0 {
            self.chapter -= 1;
            self.scene = story.chapter(self.chapter).map_or(0, |c| c.scene_count().saturating_sub(1));
        } else {
            return false;
        }
        true
    }

    pub fn is_at_start(&self) -> bool {
        self.chapter == 0 && self.scene == 0
    }

    pub fn is_at_end(&self, story: &Story) -> bool {
        let scenes = story.chapter(self.chapter).map_or(0, Chapter::scene_count);
        self.chapter + 1 >= story.chapter_count() && self.scene + 1 >= scenes
    }

    pub fn progress(&self, story: &Story) -> Progress {
        let before: usize = story.chapters().iter().take(self.chapter).map(Chapter::scene_count).sum();
        Progress { current: before + self.scene + 1, total: story.total_scenes() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illustration::IllustrationTag;

    fn story_with(sizes: &[usize]) -> Story {
        let chapters = sizes
            .iter()
            .enumerate()
            .map(|(c, &n)| {
                let scenes = (0..n)
                    .map(|s| Scene::new(&format!("{}-{}", c, s), &["line"], IllustrationTag::Blank))
                    .collect();
                Chapter::new(&format!("chapter {}", c), scenes)
            })
            .collect();
        Story::new("test", chapters).unwrap()
    }

    fn at(chapter: usize, scene: usize) -> NavigationState {
        NavigationState { chapter, scene }
    }

    /// Every valid position, in reading order.
    fn all_positions(story: &Story) -> Vec<NavigationState> {
        story
            .chapters()
            .iter()
            .enumerate()
            .flat_map(|(c, chapter)| (0..chapter.scene_count()).map(move |s| at(c, s)))
            .collect()
    }

    #[test]
    fn test_walk_two_chapters() {
        let story = story_with(&[2, 1]);
        let mut nav = NavigationState::start();

        assert!(nav.advance(&story));
        assert_eq!(nav, at(0, 1));
        assert!(nav.advance(&story));
        assert_eq!(nav, at(1, 0));
        assert!(!nav.advance(&story));
        assert_eq!(nav, at(1, 0));

        assert!(nav.retreat(&story));
        assert_eq!(nav, at(0, 1));
    }

    #[test]
    fn test_retreat_lands_on_last_scene() {
        let story = story_with(&[3, 2]);
        let mut nav = at(1, 0);
        nav.retreat(&story);
        assert_eq!(nav, at(0, 2));
    }

    #[test]
    fn test_retreat_at_start_is_noop() {
        let story = story_with(&[2, 1]);
        let mut nav = NavigationState::start();
        assert!(!nav.retreat(&story));
        assert_eq!(nav, at(0, 0));
        assert!(nav.is_at_start());
    }

    #[test]
    fn test_advance_then_retreat_restores() {
        let story = story_with(&[2, 1, 3, 1]);
        let positions = all_positions(&story);
        let last = *positions.last().unwrap();

        for &pos in &positions {
            let mut nav = pos;
            if nav.advance(&story) {
                nav.retreat(&story);
            } else {
                assert_eq!(pos, last);
            }
            assert_eq!(nav, pos);

            let mut nav = pos;
            if nav.retreat(&story) {
                nav.advance(&story);
            } else {
                assert_eq!(pos, at(0, 0));
            }
            assert_eq!(nav, pos);
        }
    }

    #[test]
    fn test_advance_visits_every_scene_in_order() {
        let story = story_with(&[1, 4, 2]);
        let mut nav = NavigationState::start();
        let mut visited = vec![nav];
        while nav.advance(&story) {
            visited.push(nav);
        }
        assert_eq!(visited, all_positions(&story));
        assert!(nav.is_at_end(&story));
    }

    #[test]
    fn test_progress_is_monotonic() {
        let story = story_with(&[2, 3, 1]);
        let total = story.total_scenes();
        let mut nav = NavigationState::start();
        assert_eq!(nav.progress(&story), Progress { current: 1, total });

        let mut last = nav.progress(&story).fraction();
        for _ in 0..total + 2 {
            nav.advance(&story);
            let f = nav.progress(&story).fraction();
            assert!(f >= last && f > 0.0 && f <= 1.0);
            last = f;
        }
        assert_eq!(nav.progress(&story).current, total);
        assert_eq!(nav.progress(&story).fraction(), 1.0);

        for _ in 0..total + 2 {
            nav.retreat(&story);
            let f = nav.progress(&story).fraction();
            assert!(f <= last && f > 0.0 && f <= 1.0);
            last = f;
        }
        assert_eq!(nav.progress(&story).current, 1);
    }

    #[test]
    fn test_progress_counts_earlier_chapters() {
        let story = story_with(&[2, 3, 1]);
        assert_eq!(at(1, 1).progress(&story), Progress { current: 4, total: 6 });
        assert_eq!(at(2, 0).progress(&story), Progress { current: 6, total: 6 });
    }

    #[test]
    fn test_single_scene_story() {
        let story = story_with(&[1]);
        let mut nav = NavigationState::start();
        assert!(nav.is_at_start() && nav.is_at_end(&story));
        assert!(!nav.advance(&story));
        assert!(!nav.retreat(&story));
        assert_eq!(nav.progress(&story).fraction(), 1.0);
    }

    #[test]
    fn test_current_scene_lookup() {
        let story = story_with(&[2, 1]);
        let nav = at(0, 1);
        assert_eq!(nav.current_chapter(&story).map(|c| c.title.as_str()), Some("chapter 0"));
        assert_eq!(nav.current_scene(&story).map(|s| s.title.as_str()), Some("0-1"));
    }
}
