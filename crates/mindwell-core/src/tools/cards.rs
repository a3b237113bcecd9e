//! Card draw sampler.
//!
//! Two fixed pools: 89 image cards addressed by index, and 88 word cards
//! carrying a keyword. Every draw picks one element from each pool
//! uniformly and independently — no exclusion of previously drawn values
//! across calls.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of image cards; indices run 0..=88.
pub const IMAGE_CARD_COUNT: u32 = 89;

/// One entry of the fixed word-card catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCard {
    pub index: u32,
    pub text: &'static str,
}

/// The fixed word-card catalog. Indices continue the image-card range.
pub const WORD_CARDS: [WordCard; 88] = [
    WordCard { index: 89, text: "感情" },
    WordCard { index: 90, text: "孤独" },
    WordCard { index: 91, text: "生气" },
    WordCard { index: 92, text: "焦虑" },
    WordCard { index: 93, text: "道歉" },
    WordCard { index: 94, text: "外表" },
    WordCard { index: 95, text: "攻击" },
    WordCard { index: 96, text: "吸引" },
    WordCard { index: 97, text: "开始" },
    WordCard { index: 98, text: "夸赞" },
    WordCard { index: 99, text: "厌烦" },
    WordCard { index: 100, text: "上司" },
    WordCard { index: 101, text: "改变" },
    WordCard { index: 102, text: "孩童" },
    WordCard { index: 103, text: "诙谐" },
    WordCard { index: 104, text: "强迫" },
    WordCard { index: 105, text: "顺应" },
    WordCard { index: 106, text: "混乱" },
    WordCard { index: 107, text: "循环" },
    WordCard { index: 108, text: "危险" },
    WordCard { index: 109, text: "依赖" },
    WordCard { index: 110, text: "破坏" },
    WordCard { index: 111, text: "丢脸" },
    WordCard { index: 112, text: "不喜欢" },
    WordCard { index: 113, text: "梦想" },
    WordCard { index: 114, text: "消除" },
    WordCard { index: 115, text: "尴尬" },
    WordCard { index: 116, text: "色情" },
    WordCard { index: 117, text: "专家" },
    WordCard { index: 118, text: "失败" },
    WordCard { index: 119, text: "幻想" },
    WordCard { index: 120, text: "父亲" },
    WordCard { index: 121, text: "恐惧" },
    WordCard { index: 122, text: "坚定" },
    WordCard { index: 123, text: "游戏" },
    WordCard { index: 124, text: "付出" },
    WordCard { index: 125, text: "前进" },
    WordCard { index: 126, text: "哀伤" },
    WordCard { index: 127, text: "罪恶感" },
    WordCard { index: 128, text: "习惯" },
    WordCard { index: 129, text: "憎恨" },
    WordCard { index: 130, text: "犹豫" },
    WordCard { index: 131, text: "躲藏" },
    WordCard { index: 132, text: "执着" },
    WordCard { index: 133, text: "家" },
    WordCard { index: 134, text: "同性恋" },
    WordCard { index: 135, text: "希望" },
    WordCard { index: 136, text: "羞辱" },
    WordCard { index: 137, text: "喜悦" },
    WordCard { index: 138, text: "恐吓" },
    WordCard { index: 139, text: "欢笑" },
    WordCard { index: 140, text: "放开" },
    WordCard { index: 141, text: "谎言" },
    WordCard { index: 142, text: "男性" },
    WordCard { index: 143, text: "母亲" },
    WordCard { index: 144, text: "裸体" },
    WordCard { index: 145, text: "亏欠" },
    WordCard { index: 146, text: "痛苦" },
    WordCard { index: 147, text: "姿态" },
    WordCard { index: 148, text: "权利游戏" },
    WordCard { index: 149, text: "憎恶" },
    WordCard { index: 150, text: "抗拒" },
    WordCard { index: 151, text: "退省" },
    WordCard { index: 152, text: "固执" },
    WordCard { index: 153, text: "敌对" },
    WordCard { index: 154, text: "腐朽" },
    WordCard { index: 155, text: "弄巧成拙" },
    WordCard { index: 156, text: "羞愧" },
    WordCard { index: 157, text: "分享" },
    WordCard { index: 158, text: "应该" },
    WordCard { index: 159, text: "奴隶" },
    WordCard { index: 160, text: "停止" },
    WordCard { index: 161, text: "陌生人" },
    WordCard { index: 162, text: "愚蠢" },
    WordCard { index: 163, text: "成功" },
    WordCard { index: 164, text: "压抑" },
    WordCard { index: 165, text: "掠夺" },
    WordCard { index: 166, text: "威胁" },
    WordCard { index: 167, text: "丑陋" },
    WordCard { index: 168, text: "受害者" },
    WordCard { index: 169, text: "违背" },
    WordCard { index: 170, text: "等候" },
    WordCard { index: 171, text: "疲惫" },
    WordCard { index: 172, text: "聪明" },
    WordCard { index: 173, text: "女人" },
    WordCard { index: 174, text: "奇妙" },
    WordCard { index: 175, text: "错误" },
    WordCard { index: 176, text: "爱情" },
];

/// The drawn word card, owned for serialization into history payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnWord {
    pub index: u32,
    pub text: String,
}

/// Result of one draw: one image card and one word card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraw {
    pub image: u32,
    pub word: DrawnWord,
}

/// Draws one image card and one word card, each uniformly.
///
/// Sampling is with replacement across calls; two consecutive draws may
/// legitimately repeat.
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> CardDraw {
    let image = rng.gen_range(0..IMAGE_CARD_COUNT);
    let word = WORD_CARDS[rng.gen_range(0..WORD_CARDS.len())];
    CardDraw {
        image,
        word: DrawnWord {
            index: word.index,
            text: word.text.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn catalog_indices_continue_the_image_range() {
        assert_eq!(WORD_CARDS.len(), 88);
        assert_eq!(WORD_CARDS[0].index, IMAGE_CARD_COUNT);
        for pair in WORD_CARDS.windows(2) {
            assert_eq!(pair[1].index, pair[0].index + 1);
        }
    }

    #[test]
    fn a_thousand_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let drawn = draw(&mut rng);
            assert!(drawn.image < IMAGE_CARD_COUNT);
            assert!(drawn.word.index >= IMAGE_CARD_COUNT);
            assert!(drawn.word.index < IMAGE_CARD_COUNT + WORD_CARDS.len() as u32);
            assert!(!drawn.word.text.is_empty());
        }
    }

    #[test]
    fn draws_are_independent_no_exclusion() {
        // With a seeded walk over many draws, repeats of an image index
        // must occur (89 values, far more draws).
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [0u32; IMAGE_CARD_COUNT as usize];
        for _ in 0..1000 {
            seen[draw(&mut rng).image as usize] += 1;
        }
        assert!(seen.iter().any(|&count| count > 1));
    }
}
