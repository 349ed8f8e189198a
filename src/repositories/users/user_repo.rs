//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! 사용자는 전원 OAuth로 가입하므로 `(auth_provider, provider_user_id)`
//! 조합이 사실상의 자연키입니다.

use std::sync::Arc;
use mongodb::{bson::{doc, oid::ObjectId, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    config::AuthProvider,
    core::registry::Repository,
    db::Database,
    domain::entities::users::User,
    errors::errors::AppError,
};

/// 사용자 조회 캐시 TTL (초)
const USER_CACHE_TTL: usize = 600;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**: `user:{user_id}`
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: (auth_provider, provider_user_id) unique, created_at(desc)
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 프로바이더와 프로바이더 사용자 ID로 사용자를 조회합니다.
    ///
    /// OAuth 로그인 시 기존 사용자 여부를 판단하는 조회입니다.
    /// 로그인 빈도가 낮으므로 캐싱하지 않습니다.
    pub async fn find_by_provider(
        &self,
        provider: &AuthProvider,
        provider_user_id: &str,
    ) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! {
                "auth_provider": provider.as_str(),
                "provider_user_id": provider_user_id,
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자를 조회합니다.
    ///
    /// 인증된 요청마다 호출될 수 있으므로 캐시 우선 조회를 적용합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:{id}`
    /// - **TTL**: 600초 (10분)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = format!("user:{}", id);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, USER_CACHE_TTL)
                .await;
        }

        Ok(user)
    }

    /// 새 사용자를 생성합니다.
    ///
    /// 동일한 `(auth_provider, provider_user_id)` 조합이 이미 존재하면
    /// 충돌로 거부합니다. 유니크 인덱스가 동시 생성 경합도 막아줍니다.
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self
            .find_by_provider(&user.auth_provider, &user.provider_user_id)
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(
                "이미 등록된 OAuth 계정입니다".to_string(),
            ));
        }

        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 마지막 로그인 시간을 갱신합니다.
    ///
    /// 로그인 성공 시마다 호출되며, 갱신 후 해당 사용자의 캐시를 무효화합니다.
    pub async fn touch_last_login(&self, id: &ObjectId) -> Result<(), AppError> {
        let now = DateTime::now();

        self.collection::<User>()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "last_login_at": now, "updated_at": now } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.redis.del(&format!("user:{}", id.to_hex())).await;

        Ok(())
    }

    /// 사용자를 삭제합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 사용자가 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 없음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<User>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.redis.del(&format!("user:{}", id)).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **프로바이더 복합 유니크 인덱스**: `(auth_provider, provider_user_id)`
    ///    조합의 중복 방지 및 로그인 조회 최적화
    /// 2. **생성일 인덱스**: 최근 사용자 조회 및 정렬 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        let provider_index = IndexModel::builder()
            .keys(doc! { "auth_provider": 1, "provider_user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("provider_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([provider_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
