//! Built-in demo roster, used on first start, after a reset, and when the
//! stored roster cannot be read.

use crate::models::{EventRecord, PaceBand};

pub fn sample_events() -> Vec<EventRecord> {
    vec![
        EventRecord::new(
            "E-250901-2000".to_string(),
            "정릉천 8km · 6:00".to_string(),
            "2025-09-01".to_string(),
            "20:00".to_string(),
            "정릉천 왕복".to_string(),
            Some(8.0),
            PaceBand::From530To600,
            "민규".to_string(),
            12,
            "초보 환영, 헤드램프 권장".to_string(),
            ["준우", "현수", "지우", "도윤"].into_iter().collect(),
        ),
        EventRecord::new(
            "E-250903-0600".to_string(),
            "트랙 인터벌 5x800m".to_string(),
            "2025-09-03".to_string(),
            "06:00".to_string(),
            "교내 트랙".to_string(),
            Some(6.0),
            PaceBand::From430To500,
            "서현".to_string(),
            8,
            "400m 조깅 휴식".to_string(),
            ["준우", "태윤"].into_iter().collect(),
        ),
        EventRecord::new(
            "E-250906-0900".to_string(),
            "북악 스카이웨이 업힐 10km".to_string(),
            "2025-09-06".to_string(),
            "09:00".to_string(),
            "정릉로-북악".to_string(),
            Some(10.0),
            PaceBand::From600To630,
            "다연".to_string(),
            20,
            "업힐 경험자 권장, 물 필수".to_string(),
            ["준우", "민서", "하윤", "지호", "시우", "연우"]
                .into_iter()
                .collect(),
        ),
    ]
}
