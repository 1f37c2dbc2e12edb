//! Story content: chapters of illustrated scenes.
//!
//! The story is fixed at build time. [`Story::new`] guarantees every chapter
//! has at least one scene, which the navigation arithmetic relies on.

use crate::illustration::IllustrationTag;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoryError {
    #[error("story has no chapters")]
    NoChapters,
    #[error("chapter {chapter} has no scenes")]
    EmptyChapter { chapter: usize },
}

pub type Result<T> = std::result::Result<T, StoryError>;

/// One card: an illustration next to a few lines of dialogue.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub title: String,
    pub content: Vec<String>,
    pub illustration: IllustrationTag,
}

impl Scene {
    pub fn new(title: &str, content: &[&str], illustration: IllustrationTag) -> Self {
        Self {
            title: title.to_string(),
            content: content.iter().map(|line| line.to_string()).collect(),
            illustration,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chapter {
    pub title: String,
    pub scenes: Vec<Scene>,
}

impl Chapter {
    pub fn new(title: &str, scenes: Vec<Scene>) -> Self {
        Self { title: title.to_string(), scenes }
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Story {
    title: String,
    chapters: Vec<Chapter>,
}

impl Story {
    pub fn new(title: &str, chapters: Vec<Chapter>) -> Result<Self> {
        if chapters.is_empty() {
            return Err(StoryError::NoChapters);
        }
        if let Some(chapter) = chapters.iter().position(|c| c.scenes.is_empty()) {
            return Err(StoryError::EmptyChapter { chapter });
        }
        Ok(Self { title: title.to_string(), chapters })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn total_scenes(&self) -> usize {
        self.chapters.iter().map(Chapter::scene_count).sum()
    }

    /// The PE quality incident, told in five chapters.
    pub fn builtin() -> Self {
        use IllustrationTag::*;

        let chapters = vec![
            Chapter::new("제1화: 계약의 시작", vec![
                Scene::new("KTH사 사무실", &[
                    "KTH사 대표: '드디어! 미국의 대형 플라스틱 제조업체와 큰 계약을 체결했어!'",
                    "직원들: '와, 정말 대단해요! 축하드립니다!'",
                ], Contract),
                Scene::new("미국의 대형 플라스틱 제조업체 사무실", &[
                    "미국 제조업체 대표: 'KTH사와의 계약 덕분에 우리도 고품질의 PE를 안정적으로 공급받을 수 있게 되었어.'",
                ], Office),
            ]),
            Chapter::new("제2화: 비용 절감의 유혹", vec![
                Scene::new("KTH사 사무실", &[
                    "KTH사 대표: '비용을 좀 더 절감할 수 있는 방법이 없을까?'",
                    "직원 A: '저렴한 PE를 구매하면 비용을 절감할 수 있을 것 같습니다.'",
                ], Money),
                Scene::new("KTH사 생산 공장", &[
                    "공장장: '새로 들어온 PE 원료, 가격은 정말 싸네요.'",
                    "품질 담당자: '그런데 용융 지수가 규격과 조금 다릅니다. 검사를 더 해봐야 하지 않을까요?'",
                    "KTH사 대표: '납기가 급하니 일단 그대로 출하합시다.'",
                ], Factory),
            ]),
            Chapter::new("제3화: 품질 문제의 발생", vec![
                Scene::new("미국의 대형 플라스틱 제조업체 공장", &[
                    "생산 책임자: '이번에 받은 PE로 만든 제품에 균열이 생기고 있어!'",
                    "엔지니어: '원료 물성이 계약 규격과 맞지 않습니다. 생산 라인을 멈춰야 합니다.'",
                ], Factory),
                Scene::new("미국의 대형 플라스틱 제조업체 사무실", &[
                    "미국 제조업체 대표: 'KTH사에 즉시 연락해서 원인을 확인하세요. 고객 납품이 모두 지연되고 있습니다.'",
                ], Office),
            ]),
            Chapter::new("제4화: 법정 다툼", vec![
                Scene::new("미국 연방 법원", &[
                    "판사: '원고는 피고가 계약상 품질 보증 의무를 위반했다고 주장합니다.'",
                    "미국 측 변호사: '불량 원료로 인한 생산 중단과 리콜 비용을 모두 배상해야 합니다.'",
                ], Court),
                Scene::new("KTH사 사무실", &[
                    "KTH사 대표: '손해배상금에 거래 중단까지... 몇 푼 아끼려다 훨씬 큰 손실을 보게 됐군.'",
                ], Money),
            ]),
            Chapter::new("제5화: 교훈", vec![
                Scene::new("품질 경영 회의", &[
                    "KTH사 대표: '비용 절감보다 중요한 건 고객과의 신뢰였어.'",
                    "직원들: '앞으로는 원료를 바꿀 때 반드시 품질 검사와 고객 승인을 거치겠습니다.'",
                ], Lesson),
                Scene::new("새로운 출발", &[
                    "KTH사 대표: '품질 관리 체계를 다시 세우고, 무너진 신뢰를 회복합시다!'",
                ], Contract),
            ]),
        ];

        Self { title: "PE 품질 사건 카드뉴스".to_string(), chapters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(title: &str) -> Scene {
        Scene::new(title, &["line"], IllustrationTag::Blank)
    }

    #[test]
    fn test_rejects_empty_story() {
        assert_eq!(Story::new("empty", Vec::new()), Err(StoryError::NoChapters));
    }

    #[test]
    fn test_rejects_empty_chapter() {
        let chapters = vec![
            Chapter::new("one", vec![scene("a")]),
            Chapter::new("two", Vec::new()),
        ];
        assert_eq!(Story::new("gap", chapters), Err(StoryError::EmptyChapter { chapter: 1 }));
    }

    #[test]
    fn test_counts() {
        let chapters = vec![
            Chapter::new("one", vec![scene("a"), scene("b")]),
            Chapter::new("two", vec![scene("c")]),
        ];
        let story = Story::new("small", chapters).unwrap();
        assert_eq!(story.chapter_count(), 2);
        assert_eq!(story.total_scenes(), 3);
        assert_eq!(story.chapter(1).map(|c| c.title.as_str()), Some("two"));
        assert!(story.chapter(2).is_none());
    }

    #[test]
    fn test_builtin_is_well_formed() {
        let story = Story::builtin();
        let rebuilt = Story::new(story.title(), story.chapters().to_vec()).unwrap();
        assert_eq!(rebuilt, story);
        assert_eq!(story.chapter_count(), 5);
        assert_eq!(story.total_scenes(), 10);
        assert!(story.chapters().iter().flat_map(|c| &c.scenes).all(|s| !s.content.is_empty()));
    }

    #[test]
    fn test_builtin_opens_with_source_scenes() {
        let story = Story::builtin();
        let opening: Vec<(&str, &str, IllustrationTag)> = story
            .chapters()
            .iter()
            .flat_map(|c| c.scenes.iter().map(move |s| (c.title.as_str(), s.title.as_str(), s.illustration)))
            .take(3)
            .collect();
        assert_eq!(opening, vec![
            ("제1화: 계약의 시작", "KTH사 사무실", IllustrationTag::Contract),
            ("제1화: 계약의 시작", "미국의 대형 플라스틱 제조업체 사무실", IllustrationTag::Office),
            ("제2화: 비용 절감의 유혹", "KTH사 사무실", IllustrationTag::Money),
        ]);
        assert_eq!(story.chapters()[0].scenes[0].content[1], "직원들: '와, 정말 대단해요! 축하드립니다!'");
    }

    #[test]
    fn test_builtin_uses_every_drawing() {
        let story = Story::builtin();
        for tag in IllustrationTag::DRAWN {
            let used = story.chapters().iter().flat_map(|c| &c.scenes).any(|s| s.illustration == tag);
            assert!(used, "no scene shows {}", tag.name());
        }
    }
}
