//! # 링크 리포지토리 구현
//!
//! 링크 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **순차 ID 발급**: 카운터 컬렉션의 원자적 `$inc` 연산
//! - **데이터 무결성**: 유니크 제약 조건 및 인덱스 관리

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    IndexModel,
};
use serde::{Deserialize, Serialize};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::links::Link,
    errors::errors::{AppError, ErrorContext},
};

/// 순차 ID 발급용 카운터 문서
///
/// `counters` 컬렉션에 `{_id: "link_id", seq: N}` 형태로 저장되며,
/// 원자적 `$inc`로 중복 없는 순차 번호를 발급합니다.
#[derive(Debug, Serialize, Deserialize)]
struct Counter {
    #[serde(rename = "_id")]
    id: String,
    seq: i64,
}

/// 카운터 컬렉션 이름
const COUNTERS_COLLECTION: &str = "counters";

/// 링크 ID 카운터의 문서 키
const LINK_ID_COUNTER: &str = "link_id";

/// 링크 조회 캐시 TTL (초)
const LINK_CACHE_TTL: usize = 600;

/// 링크 데이터 액세스 리포지토리
///
/// 링크 엔티티의 CRUD 연산을 담당하며, MongoDB 컬렉션과 Redis 캐시를
/// 통합하여 최적화된 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**: `link:{link_id}`
/// - **대상**: 리다이렉트 경로의 `link_id` 조회 (가장 빈번한 읽기)
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `links`
/// - **인덱스**: link_id(unique), user_id+created_at, expires_at
///
/// ## 순차 ID 발급
///
/// 단축 해시는 순차 숫자 ID의 인코딩이므로, ID 발급이 원자적이어야
/// 해시 충돌이 없습니다. `counters` 컬렉션에 대한
/// `find_one_and_update($inc, upsert)` 연산으로 이를 보장합니다.
#[repository(name = "link", collection = "links")]
pub struct LinkRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl LinkRepository {
    /// 다음 순차 링크 ID를 발급합니다.
    ///
    /// 카운터 문서를 원자적으로 증가시키고 증가된 값을 반환합니다.
    /// 문서가 없으면 upsert로 생성되어 첫 발급 값은 1입니다.
    /// 발급된 ID는 건너뛸 수는 있어도(실패한 생성) 중복될 수는 없습니다.
    pub async fn next_link_id(&self) -> Result<i64, AppError> {
        let counters = self
            .db
            .get_database()
            .collection::<Counter>(COUNTERS_COLLECTION);

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = counters
            .find_one_and_update(
                doc! { "_id": LINK_ID_COUNTER },
                doc! { "$inc": { "seq": 1 } },
            )
            .with_options(options)
            .await
            .context("failed to increment link id counter")?
            .ok_or_else(|| {
                AppError::InternalError("link id counter missing after upsert".to_string())
            })?;

        Ok(counter.seq)
    }

    /// 새 링크를 저장합니다.
    ///
    /// `link_id`는 호출 전에 [`next_link_id`](Self::next_link_id)로
    /// 발급받아야 합니다.
    pub async fn create(&self, mut link: Link) -> Result<Link, AppError> {
        let result = self
            .collection::<Link>()
            .insert_one(&link)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        link.id = result.inserted_id.as_object_id();

        Ok(link)
    }

    /// 순차 ID로 링크를 조회합니다.
    ///
    /// 리다이렉트 경로에서 호출되는 가장 빈번한 조회이므로
    /// 캐시 우선 조회를 적용합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `link:{link_id}`
    /// - **TTL**: 600초 (10분)
    /// - **캐시 미스**: MongoDB에서 조회 후 캐시에 저장
    pub async fn find_by_link_id(&self, link_id: i64) -> Result<Option<Link>, AppError> {
        let cache_key = format!("link:{}", link_id);

        if let Ok(Some(cached)) = self.redis.get::<Link>(&cache_key).await {
            return Ok(Some(cached));
        }

        let link = self
            .collection::<Link>()
            .find_one(doc! { "link_id": link_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref link) = link {
            let _ = self
                .redis
                .set_with_expiry(&cache_key, link, LINK_CACHE_TTL)
                .await;
        }

        Ok(link)
    }

    /// 사용자의 링크 목록을 페이지 단위로 조회합니다.
    ///
    /// 최신 생성 순으로 정렬하며, 전체 개수를 함께 반환합니다.
    ///
    /// # 인자
    ///
    /// * `user_id` - 소유자의 ObjectId
    /// * `page` - 페이지 번호 (1부터 시작)
    /// * `per_page` - 페이지 크기
    pub async fn list_by_user(
        &self,
        user_id: &ObjectId,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Link>, u64), AppError> {
        let filter = doc! { "user_id": user_id };

        let total = self
            .collection::<Link>()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let skip = page.saturating_sub(1).saturating_mul(per_page);

        let links: Vec<Link> = self
            .collection::<Link>()
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(per_page as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok((links, total))
    }

    /// 소유자의 링크를 삭제합니다.
    ///
    /// 소유자가 아닌 링크는 필터에 걸리지 않으므로 삭제되지 않습니다.
    /// 삭제 성공 시 리다이렉트 캐시를 무효화합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 링크가 삭제됨
    /// * `Ok(false)` - 해당 링크가 없거나 소유자가 아님
    pub async fn delete_by_link_id(
        &self,
        link_id: i64,
        user_id: &ObjectId,
    ) -> Result<bool, AppError> {
        let result = self
            .collection::<Link>()
            .delete_one(doc! { "link_id": link_id, "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.redis.del(&format!("link:{}", link_id)).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 만료된 링크를 모두 삭제합니다.
    ///
    /// 백그라운드 정리 작업에서 주기적으로 호출됩니다.
    /// `expires_at`이 없는 링크(무제한)는 대상에서 제외됩니다.
    ///
    /// # 반환값
    ///
    /// 삭제된 링크 수
    pub async fn delete_all_expired(&self) -> Result<u64, AppError> {
        let result = self
            .collection::<Link>()
            .delete_many(doc! { "expires_at": { "$lt": DateTime::now() } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행하여 쿼리 성능을 최적화합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **링크 ID 유니크 인덱스**: `link_id` 조회 및 중복 방지
    /// 2. **소유자 복합 인덱스**: `user_id` + `created_at`(desc), 목록 조회용
    /// 3. **만료 시각 인덱스**: 만료 링크 정리 작업용
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Link>();

        let link_id_index = IndexModel::builder()
            .keys(doc! { "link_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("link_id_unique".to_string())
                .build())
            .build();

        let owner_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("user_id_created_at".to_string())
                .build())
            .build();

        let expires_at_index = IndexModel::builder()
            .keys(doc! { "expires_at": 1 })
            .options(IndexOptions::builder()
                .name("expires_at_asc".to_string())
                .build())
            .build();

        collection
            .create_indexes([link_id_index, owner_index, expires_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
